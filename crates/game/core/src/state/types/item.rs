//! Item-related state types.
//!
//! - ItemHandle: reference to an item definition held by the item oracle
//! - ItemInstance: a concrete item carried in an inventory
//! - ItemState: an item lying on the ground

use super::{EntityId, Position};

/// Reference to an item definition stored outside the core (lookup via Env).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemHandle(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemInstance {
    pub id: EntityId,
    pub handle: ItemHandle,
}

impl ItemInstance {
    pub fn new(id: EntityId, handle: ItemHandle) -> Self {
        Self { id, handle }
    }
}

/// Items that exist on the ground (not inside inventories).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub position: Position,
    pub handle: ItemHandle,
}

impl ItemState {
    pub fn new(id: EntityId, position: Position, handle: ItemHandle) -> Self {
        Self {
            id,
            position,
            handle,
        }
    }

    pub fn instance(&self) -> ItemInstance {
        ItemInstance::new(self.id, self.handle)
    }
}
