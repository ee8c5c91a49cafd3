//! Inventory system for actors.

use crate::state::types::{EntityId, ItemInstance};

/// Bounded list of carried items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    pub capacity: usize,
    pub items: Vec<ItemInstance>,
}

impl InventoryState {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn get(&self, id: EntityId) -> Option<&ItemInstance> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Adds an item unless the inventory is full; hands it back on failure.
    pub fn try_push(&mut self, item: ItemInstance) -> Result<(), ItemInstance> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, id: EntityId) -> Option<ItemInstance> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }
}
