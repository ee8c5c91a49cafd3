use super::{ActorTemplate, OracleError};
use crate::state::{FloorId, ItemHandle, Position, TileGrid};

/// Produces the layout and population of a floor.
///
/// The engine calls this whenever the party changes floors; implementations
/// must be deterministic for a given `(floor, seed)`.
pub trait FloorGenerator: Send + Sync {
    fn generate(&self, floor: FloorId, seed: u64) -> Result<GeneratedFloor, OracleError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFloor {
    pub map: TileGrid,
    /// Arrival point for actors that did not step through a portal.
    pub entry: Position,
    pub actors: Vec<ActorSpawn>,
    pub items: Vec<ItemSpawn>,
}

impl GeneratedFloor {
    pub fn new(map: TileGrid, entry: Position) -> Self {
        Self {
            map,
            entry,
            actors: Vec::new(),
            items: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActorSpawn {
    pub template: ActorTemplate,
    pub position: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemSpawn {
    pub handle: ItemHandle,
    pub position: Position,
}
