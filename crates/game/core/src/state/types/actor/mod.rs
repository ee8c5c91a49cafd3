//! Actor state: identity, placement, stats, behavior and belongings.

mod equipment;
mod inventory;

pub use equipment::Equipment;
pub use inventory::InventoryState;

use super::{EntityId, Position};
use crate::ai::Behavior;
use crate::env::{GameEnv, ItemKind, ItemOracle, OracleError};
use crate::stats::{CombatStats, EffectiveStats, EquipmentBonus};

/// Complete actor state.
///
/// # Invariants
///
/// - `behavior` is `None` exactly when the actor is dead
/// - dead actors never block movement
/// - equipment slots only reference items present in `inventory`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub stats: CombatStats,
    pub behavior: Option<Behavior>,
    pub inventory: InventoryState,
    pub equipment: Equipment,
    pub blocks_movement: bool,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        stats: CombatStats,
        behavior: Behavior,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            stats,
            behavior: Some(behavior),
            inventory: InventoryState::default(),
            equipment: Equipment::empty(),
            blocks_movement: true,
        }
    }

    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory.capacity = capacity;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.behavior.is_some()
    }

    pub fn is_hostile(&self) -> bool {
        self.behavior.as_ref().is_some_and(Behavior::is_hostile)
    }

    pub fn is_friendly(&self) -> bool {
        self.behavior.as_ref().is_some_and(Behavior::is_friendly)
    }

    pub fn in_party(&self) -> bool {
        self.behavior.as_ref().is_some_and(Behavior::in_party)
    }

    /// Turns the actor into a corpse: no behavior, no blocking, renamed.
    pub fn mark_dead(&mut self) {
        self.behavior = None;
        self.blocks_movement = false;
        self.stats.hp.current = 0;
        self.name = format!("remains of {}", self.name);
    }

    /// Sums the bonuses of everything equipped.
    pub fn equipment_bonus(&self, items: &dyn ItemOracle) -> Result<EquipmentBonus, OracleError> {
        let mut bonus = EquipmentBonus::default();
        for item_id in self.equipment.equipped() {
            let Some(item) = self.inventory.get(item_id) else {
                continue;
            };
            let definition = items
                .definition(item.handle)
                .ok_or(OracleError::ItemNotFound(item.handle))?;
            if let ItemKind::Equippable(stats) = definition.kind {
                bonus.add(&stats);
            }
        }
        Ok(bonus)
    }

    /// Stats after equipment. Unequipped actors never touch the item oracle.
    pub fn effective_stats(&self, env: &GameEnv<'_>) -> Result<EffectiveStats, OracleError> {
        if self.equipment.is_empty() {
            return Ok(self.stats.effective(&EquipmentBonus::default()));
        }
        let bonus = self.equipment_bonus(env.items()?)?;
        Ok(self.stats.effective(&bonus))
    }
}
