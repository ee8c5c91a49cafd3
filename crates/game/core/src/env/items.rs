use crate::action::ItemUse;
use crate::error::ActionError;
use crate::state::ItemHandle;

/// Item definitions and the behaviour of usable items.
///
/// Consumable effects live outside the core; the engine only knows how to call
/// [`ItemOracle::activate`] and what to do with the returned [`Consumption`].
pub trait ItemOracle: Send + Sync {
    fn definition(&self, handle: ItemHandle) -> Option<&ItemDefinition>;

    /// Applies the item's effect. The default refuses, which is right for
    /// equipment and inert items.
    fn activate(&self, handle: ItemHandle, usage: &mut ItemUse<'_, '_>) -> Result<Consumption, ActionError> {
        let name = self
            .definition(handle)
            .map(|definition| definition.name.as_str())
            .unwrap_or("item");
        Err(ActionError::impossible(format!("The {name} cannot be used.")))
    }
}

/// Item definition: a display name plus type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, kind: ItemKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn equippable(&self) -> Option<&EquippableStats> {
        match &self.kind {
            ItemKind::Equippable(stats) => Some(stats),
            ItemKind::Consumable => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    /// Used up through [`ItemOracle::activate`].
    Consumable,
    Equippable(EquippableStats),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Armor,
}

/// Bonuses granted while an item is equipped.
///
/// Weapons roll `power_min..=power_max` extra damage on every attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EquippableStats {
    pub slot: EquipmentSlot,
    pub power_min: u32,
    pub power_max: u32,
    pub pen_bonus: i32,
    pub defense_bonus: i32,
    pub ms_bonus: i32,
    pub qn_bonus: i32,
    pub luck_bonus: i32,
    pub equip_rate: i32,
}

impl EquippableStats {
    pub fn weapon(power_min: u32, power_max: u32, pen_bonus: i32) -> Self {
        Self {
            slot: EquipmentSlot::Weapon,
            power_min,
            power_max,
            pen_bonus,
            ..Self::default()
        }
    }

    pub fn armor(defense_bonus: i32) -> Self {
        Self {
            slot: EquipmentSlot::Armor,
            defense_bonus,
            ..Self::default()
        }
    }
}

impl Default for EquippableStats {
    fn default() -> Self {
        Self {
            slot: EquipmentSlot::Weapon,
            power_min: 0,
            power_max: 0,
            pen_bonus: 0,
            defense_bonus: 0,
            ms_bonus: 0,
            qn_bonus: 0,
            luck_bonus: 0,
            equip_rate: 0,
        }
    }
}

/// What happens to an item after a successful activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Consumption {
    /// The item is used up and leaves the inventory.
    Consumed,
    /// The item stays (e.g. a reusable charm).
    Kept,
}
