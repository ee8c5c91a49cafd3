//! Fixed arena layouts for the city and the dungeon floors.
//!
//! The city is a walled square with a standing blue portal and a friendly
//! NPC. Every dungeon floor is a single hall with stairs down in the far
//! corner and a red portal back home; its population is drawn from a pool
//! that widens with depth, placed deterministically from the floor seed.

use barbarian_core::env::{ActorSpawn, ItemSpawn, RollContext, compute_seed};
use barbarian_core::{
    FloorGenerator, FloorId, GeneratedFloor, ItemHandle, MapDimensions, OracleError, PcgRng,
    Position, RngOracle, TerrainKind, TileGrid,
};

use crate::actors::ActorCatalog;
use crate::items;

const EARLY_POOL: &[&str] = &["goblin", "goblin_fighter", "goblin_archer", "skeleton"];
const MIDDLE_POOL: &[&str] = &["orc", "death_fiend"];
const DEEP_POOL: &[&str] = &["troll"];
const SCROLLS: [ItemHandle; 3] = [
    items::CONFUSION_SCROLL,
    items::LIGHTNING_SCROLL,
    items::FIREBALL_SCROLL,
];

/// Monsters never spawn within this Chebyshev distance of the entry.
const SAFE_RADIUS: u32 = 3;

pub struct ArenaFloors {
    actors: ActorCatalog,
    dimensions: MapDimensions,
}

impl ArenaFloors {
    pub const WIDTH: u32 = 40;
    pub const HEIGHT: u32 = 24;
    pub const MAX_MONSTERS: u32 = 8;
    /// Every this many floors a boss guards the stairs.
    pub const BOSS_INTERVAL: u32 = 5;

    pub fn new(actors: ActorCatalog) -> Self {
        Self {
            actors,
            dimensions: MapDimensions::new(Self::WIDTH, Self::HEIGHT),
        }
    }

    /// Cell the city's permanent blue portal stands on.
    pub fn city_portal(&self) -> Position {
        self.dimensions.center().offset(6, 0)
    }

    pub fn stairs(&self) -> Position {
        Position::new(self.dimensions.width as i32 - 3, self.dimensions.height as i32 - 3)
    }

    pub fn return_portal(&self) -> Position {
        Position::new(2, self.dimensions.height as i32 - 3)
    }

    fn spawn(
        &self,
        floor: FloorId,
        id: &str,
        position: Position,
    ) -> Result<ActorSpawn, OracleError> {
        let template = self
            .actors
            .get(id)
            .cloned()
            .ok_or_else(|| OracleError::FloorGeneration {
                floor,
                reason: format!("unknown actor template '{id}'"),
            })?;
        Ok(ActorSpawn { template, position })
    }

    fn city(&self) -> Result<GeneratedFloor, OracleError> {
        let mut map = self.bordered(TerrainKind::CityWall);
        map.set_terrain(self.city_portal(), TerrainKind::PortalBlue);

        let entry = self.dimensions.center();
        let mut floor = GeneratedFloor::new(map, entry);
        floor
            .actors
            .push(self.spawn(FloorId::CITY, "npc", entry.offset(-3, 0))?);
        floor.items.push(ItemSpawn {
            handle: items::HEALTH_POTION,
            position: entry.offset(0, 2),
        });
        floor.items.push(ItemSpawn {
            handle: items::DAGGER,
            position: entry.offset(0, -2),
        });
        Ok(floor)
    }

    fn dungeon(&self, id: FloorId, seed: u64) -> Result<GeneratedFloor, OracleError> {
        let mut map = self.bordered(TerrainKind::Wall);
        map.set_terrain(self.stairs(), TerrainKind::DownStairs);
        map.set_terrain(self.return_portal(), TerrainKind::PortalRed);

        let entry = Position::new(2, 2);
        let mut open: Vec<Position> = map
            .cells()
            .filter(|(position, terrain)| {
                *terrain == TerrainKind::Floor && position.chebyshev(entry) > SAFE_RADIUS
            })
            .map(|(position, _)| position)
            .collect();

        let mut draws = Draws::new(seed, id);
        let mut floor = GeneratedFloor::new(map, entry);

        if id.0 % Self::BOSS_INTERVAL == 0 {
            let guard = self.stairs().offset(-1, -1);
            open.retain(|position| *position != guard);
            floor.actors.push(self.spawn(id, "boss", guard)?);
        }

        let pool = Self::pool(id);
        let monsters = (2 + id.0).min(Self::MAX_MONSTERS);
        for _ in 0..monsters {
            let Some(position) = draws.take(&mut open) else {
                break;
            };
            let template = pool[draws.pick(pool.len())];
            floor.actors.push(self.spawn(id, template, position)?);
        }

        let loot = [items::HEALTH_POTION, SCROLLS[draws.pick(SCROLLS.len())]];
        for handle in loot {
            if let Some(position) = draws.take(&mut open) {
                floor.items.push(ItemSpawn { handle, position });
            }
        }

        tracing::debug!(
            "generated {} with {} actors and {} items",
            id,
            floor.actors.len(),
            floor.items.len()
        );
        Ok(floor)
    }

    fn pool(floor: FloorId) -> Vec<&'static str> {
        let mut pool = EARLY_POOL.to_vec();
        if floor.0 >= 3 {
            pool.extend_from_slice(MIDDLE_POOL);
        }
        if floor.0 >= 5 {
            pool.extend_from_slice(DEEP_POOL);
        }
        pool
    }

    fn bordered(&self, border: TerrainKind) -> TileGrid {
        let mut map = TileGrid::walled_room(self.dimensions);
        if border != TerrainKind::Wall {
            let walls: Vec<Position> = map
                .cells()
                .filter(|(_, terrain)| *terrain == TerrainKind::Wall)
                .map(|(position, _)| position)
                .collect();
            for position in walls {
                map.set_terrain(position, border);
            }
        }
        map
    }
}

impl Default for ArenaFloors {
    fn default() -> Self {
        Self::new(ActorCatalog::builtin())
    }
}

impl FloorGenerator for ArenaFloors {
    fn generate(&self, floor: FloorId, seed: u64) -> Result<GeneratedFloor, OracleError> {
        if floor.is_city() {
            self.city()
        } else {
            self.dungeon(floor, seed)
        }
    }
}

/// Sequential deterministic draws for one floor.
struct Draws {
    seed: u64,
    floor: FloorId,
    counter: u64,
}

impl Draws {
    fn new(seed: u64, floor: FloorId) -> Self {
        Self {
            seed,
            floor,
            counter: 0,
        }
    }

    fn pick(&mut self, len: usize) -> usize {
        let seed = compute_seed(self.seed, self.counter, self.floor.0, RollContext::Floor);
        self.counter += 1;
        PcgRng.pick(seed, len)
    }

    /// Removes and returns a random cell from `cells`.
    fn take(&mut self, cells: &mut Vec<Position>) -> Option<Position> {
        if cells.is_empty() {
            return None;
        }
        let index = self.pick(cells.len());
        Some(cells.swap_remove(index))
    }
}
