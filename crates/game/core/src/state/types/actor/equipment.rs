//! Equipment slots for actors.
//!
//! Slots reference carried items by instance id; the item itself stays in the
//! inventory while equipped.

use crate::env::EquipmentSlot;
use crate::state::types::EntityId;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub weapon: Option<EntityId>,
    pub armor: Option<EntityId>,
}

impl Equipment {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipmentSlot) -> Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Armor => self.armor,
        }
    }

    /// Places an item in a slot, returning whatever occupied it before.
    pub fn equip(&mut self, slot: EquipmentSlot, item: EntityId) -> Option<EntityId> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.replace(item),
            EquipmentSlot::Armor => self.armor.replace(item),
        }
    }

    /// Clears whichever slot holds `item`.
    pub fn unequip(&mut self, item: EntityId) -> Option<EquipmentSlot> {
        let slot = self.slot_of(item)?;
        match slot {
            EquipmentSlot::Weapon => self.weapon = None,
            EquipmentSlot::Armor => self.armor = None,
        }
        Some(slot)
    }

    pub fn slot_of(&self, item: EntityId) -> Option<EquipmentSlot> {
        if self.weapon == Some(item) {
            Some(EquipmentSlot::Weapon)
        } else if self.armor == Some(item) {
            Some(EquipmentSlot::Armor)
        } else {
            None
        }
    }

    pub fn is_equipped(&self, item: EntityId) -> bool {
        self.slot_of(item).is_some()
    }

    pub fn equipped(&self) -> impl Iterator<Item = EntityId> {
        self.weapon.into_iter().chain(self.armor)
    }

    pub fn is_empty(&self) -> bool {
        self.weapon.is_none() && self.armor.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equip_replaces_and_unequip_clears() {
        let mut equipment = Equipment::empty();
        assert_eq!(equipment.equip(EquipmentSlot::Weapon, EntityId(3)), None);
        assert_eq!(
            equipment.equip(EquipmentSlot::Weapon, EntityId(4)),
            Some(EntityId(3))
        );
        assert_eq!(equipment.slot_of(EntityId(4)), Some(EquipmentSlot::Weapon));
        assert_eq!(equipment.unequip(EntityId(4)), Some(EquipmentSlot::Weapon));
        assert!(equipment.is_empty());
    }
}
