pub mod actor;
pub mod common;
pub mod entities;
pub mod item;
pub mod world;

pub use actor::{ActorState, Equipment, InventoryState};
pub use common::{Direction, EntityId, FloorId, Position, ResourceMeter};
pub use entities::EntitiesState;
pub use item::{ItemHandle, ItemInstance, ItemState};
pub use world::{MapDimensions, Portal, PortalKind, TerrainKind, TileGrid, WorldState};
