//! Shared fixtures for unit tests.

use crate::action::{Action, ActionContext, ActionOutcome, AttackReport, ItemUse};
use crate::ai;
use crate::config::GameConfig;
use crate::engine::GameEngine;
use crate::env::{
    ActorSpawn, ActorTemplate, BehaviorKind, Consumption, EquippableStats, FloorGenerator,
    GameEnv, GeneratedFloor, ItemDefinition, ItemKind, ItemOracle, OracleError, RngOracle,
};
use crate::error::ActionError;
use crate::message::{ColorHint, Message};
use crate::state::{
    ActorState, EntityId, FloorId, GameState, ItemHandle, MapDimensions, Position, TileGrid,
    WorldState,
};

pub const DAGGER: ItemHandle = ItemHandle(0);
pub const SWORD: ItemHandle = ItemHandle(1);
pub const CHAIN_MAIL: ItemHandle = ItemHandle(2);
pub const POTION: ItemHandle = ItemHandle(3);
/// Armor-slot item granting +50 movement speed.
pub const BOOTS: ItemHandle = ItemHandle(4);

/// Where the test floor generator puts arriving actors.
pub const FLOOR_ENTRY: Position = Position { x: 2, y: 2 };
/// Where the test floor generator spawns its goblin.
pub const FLOOR_SPAWN: Position = Position { x: 9, y: 9 };

/// Every draw returns `n - 1`, so a d20 shows `n` and a range `min..=max`
/// yields `min + (n - 1) % (max - min + 1)`.
#[derive(Clone, Copy, Debug)]
pub struct FixedRng(pub u32);

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0.saturating_sub(1)
    }
}

pub struct TestItems {
    definitions: Vec<ItemDefinition>,
}

impl Default for TestItems {
    fn default() -> Self {
        let mut boots = EquippableStats::armor(0);
        boots.ms_bonus = 50;
        Self {
            definitions: vec![
                ItemDefinition::new("Dagger", ItemKind::Equippable(EquippableStats::weapon(1, 2, 2))),
                ItemDefinition::new("Sword", ItemKind::Equippable(EquippableStats::weapon(1, 4, 4))),
                ItemDefinition::new("Chain Mail", ItemKind::Equippable(EquippableStats::armor(3))),
                ItemDefinition::new("Health Potion", ItemKind::Consumable),
                ItemDefinition::new("Swift Boots", ItemKind::Equippable(boots)),
            ],
        }
    }
}

impl ItemOracle for TestItems {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition> {
        self.definitions.get(handle.0 as usize)
    }

    fn activate(
        &self,
        handle: ItemHandle,
        usage: &mut ItemUse<'_, '_>,
    ) -> Result<Consumption, ActionError> {
        let name = self
            .definition(handle)
            .map_or("item", |definition| definition.name.as_str());
        if handle != POTION {
            return Err(ActionError::impossible(format!("The {name} cannot be used.")));
        }
        let recovered = usage.ctx.actor_mut(usage.user)?.stats.heal(4);
        if recovered == 0 {
            return Err(ActionError::impossible("Your health is already full."));
        }
        usage.ctx.emit(
            format!("You consume the {name}, and recover {recovered} HP!"),
            ColorHint::HealthRecovered,
        );
        Ok(Consumption::Consumed)
    }
}

/// Every floor is a revealed 12x12 room holding one goblin.
#[derive(Default)]
pub struct TestFloors;

impl FloorGenerator for TestFloors {
    fn generate(&self, _floor: FloorId, _seed: u64) -> Result<GeneratedFloor, OracleError> {
        let mut map = TileGrid::walled_room(MapDimensions::new(12, 12));
        map.reveal_all();
        let mut floor = GeneratedFloor::new(map, FLOOR_ENTRY);
        floor.actors.push(ActorSpawn {
            template: goblin(),
            position: FLOOR_SPAWN,
        });
        Ok(floor)
    }
}

pub fn player() -> ActorTemplate {
    ActorTemplate::new("Player", 30, 10, 2, 0, BehaviorKind::PlayerControlled).with_inventory(26)
}

pub fn goblin() -> ActorTemplate {
    ActorTemplate::new("Goblin", 6, 6, 2, 1, BehaviorKind::HostileMelee)
}

pub fn troll() -> ActorTemplate {
    ActorTemplate::new("Troll", 16, 16, 6, 6, BehaviorKind::HostileMelee)
}

pub fn npc() -> ActorTemplate {
    ActorTemplate::new("NPC", 30, 14, 2, 0, BehaviorKind::FriendlyFollower)
}

pub fn archer() -> ActorTemplate {
    ActorTemplate::new(
        "Goblin Archer",
        4,
        6,
        3,
        2,
        BehaviorKind::HostileRanged {
            max_range: 6,
            min_range: 3,
        },
    )
}

/// A revealed walled room on the city floor with fixed dice.
pub struct Fixture {
    pub state: GameState,
    pub config: GameConfig,
    pub rng: FixedRng,
    pub items: TestItems,
    pub floors: TestFloors,
    pub messages: Vec<Message>,
}

impl Fixture {
    pub fn new(width: u32, height: u32) -> Self {
        let mut map = TileGrid::walled_room(MapDimensions::new(width, height));
        map.reveal_all();
        Self {
            state: GameState::new(WorldState::new(map, FloorId::CITY)),
            config: GameConfig::default(),
            rng: FixedRng(10),
            items: TestItems::default(),
            floors: TestFloors,
            messages: Vec::new(),
        }
    }

    pub fn with_player(mut self, position: Position) -> Self {
        self.state.add_player(&player(), position);
        self
    }

    pub fn with_die(mut self, face: u32) -> Self {
        self.set_die(face);
        self
    }

    pub fn set_die(&mut self, face: u32) {
        self.rng = FixedRng(face);
    }

    pub fn spawn(&mut self, template: &ActorTemplate, position: Position) -> EntityId {
        self.state.spawn_actor(template, position)
    }

    /// Makes a cell unseen and unexplored.
    pub fn hide(&mut self, position: Position) {
        self.state.world.map.set_visible(position, false);
        self.state.world.map.set_known(position, false);
    }

    pub fn ctx(&mut self) -> ActionContext<'_> {
        let env = GameEnv::with_all(&self.items, &self.floors, &self.rng);
        ActionContext::new(&mut self.state, env, &self.config, &mut self.messages)
    }

    pub fn engine(&mut self) -> GameEngine<'_> {
        let env = GameEnv::with_all(&self.items, &self.floors, &self.rng);
        GameEngine::new(&mut self.state, env, &self.config)
    }

    pub fn run(&mut self, action: impl Into<Action>) -> Result<ActionOutcome, ActionError> {
        let env = GameEnv::with_all(&self.items, &self.floors, &self.rng);
        GameEngine::new(&mut self.state, env, &self.config).execute(action.into(), &mut self.messages)
    }

    pub fn ai_turn(&mut self, actor: EntityId) -> Result<Option<ActionOutcome>, ActionError> {
        let env = GameEnv::with_all(&self.items, &self.floors, &self.rng);
        GameEngine::new(&mut self.state, env, &self.config).take_ai_turn(actor, &mut self.messages)
    }

    pub fn decide(&mut self, actor: EntityId) -> Action {
        ai::decide(&mut self.ctx(), actor).expect("decision failed")
    }

    pub fn attack(&mut self, attacker: EntityId, dx: i32, dy: i32) -> AttackReport {
        match self.run(Action::melee(attacker, dx, dy)) {
            Ok(ActionOutcome::Attacked(report)) => report,
            other => panic!("expected an attack, got {other:?}"),
        }
    }

    pub fn actor(&self, id: EntityId) -> &ActorState {
        self.state.entities.actor(id).expect("actor exists")
    }

    pub fn texts(&self) -> Vec<&str> {
        self.messages.iter().map(|message| message.text.as_str()).collect()
    }
}
