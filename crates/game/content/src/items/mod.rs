//! Item catalog: definitions plus the behaviour of usable items.
//!
//! Handles are indices into the catalog, so the order of entries is part of
//! the save format.

mod effects;

pub use effects::ItemEffect;

use barbarian_core::action::ItemUse;
use barbarian_core::env::EquippableStats;
use barbarian_core::{ActionError, Consumption, ItemDefinition, ItemHandle, ItemKind, ItemOracle};

pub const DAGGER: ItemHandle = ItemHandle(0);
pub const SWORD: ItemHandle = ItemHandle(1);
pub const LEATHER_ARMOR: ItemHandle = ItemHandle(2);
pub const CHAIN_MAIL: ItemHandle = ItemHandle(3);
pub const HEALTH_POTION: ItemHandle = ItemHandle(4);
pub const CONFUSION_SCROLL: ItemHandle = ItemHandle(5);
pub const LIGHTNING_SCROLL: ItemHandle = ItemHandle(6);
pub const FIREBALL_SCROLL: ItemHandle = ItemHandle(7);

/// One catalog row as it appears in content files.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEntry {
    pub name: String,
    pub kind: ItemKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<ItemEffect>,
}

impl ItemEntry {
    pub fn equippable(name: &str, stats: EquippableStats) -> Self {
        Self {
            name: name.to_string(),
            kind: ItemKind::Equippable(stats),
            effect: None,
        }
    }

    pub fn consumable(name: &str, effect: ItemEffect) -> Self {
        Self {
            name: name.to_string(),
            kind: ItemKind::Consumable,
            effect: Some(effect),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemCatalog {
    definitions: Vec<ItemDefinition>,
    effects: Vec<Option<ItemEffect>>,
}

impl ItemCatalog {
    pub fn new(entries: Vec<ItemEntry>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            catalog
                .definitions
                .push(ItemDefinition::new(entry.name, entry.kind));
            catalog.effects.push(entry.effect);
        }
        catalog
    }

    /// The stock weapons, armour and consumables.
    pub fn builtin() -> Self {
        Self::new(vec![
            ItemEntry::equippable("Dagger", EquippableStats::weapon(1, 2, 2)),
            ItemEntry::equippable("Sword", EquippableStats::weapon(1, 4, 4)),
            ItemEntry::equippable("Leather Armor", EquippableStats::armor(1)),
            ItemEntry::equippable("Chain Mail", EquippableStats::armor(3)),
            ItemEntry::consumable("Health Potion", ItemEffect::Heal { amount: 4 }),
            ItemEntry::consumable("Confusion Scroll", ItemEffect::Confuse { turns: 10 }),
            ItemEntry::consumable(
                "Lightning Scroll",
                ItemEffect::Lightning {
                    damage: 30,
                    range: 5,
                },
            ),
            ItemEntry::consumable(
                "Fireball Scroll",
                ItemEffect::Fireball {
                    damage: 16,
                    radius: 3,
                },
            ),
        ])
    }

    pub fn handle_of(&self, name: &str) -> Option<ItemHandle> {
        self.definitions
            .iter()
            .position(|definition| definition.name == name)
            .map(|index| ItemHandle(index as u32))
    }

    pub fn effect(&self, handle: ItemHandle) -> Option<ItemEffect> {
        self.effects.get(handle.0 as usize).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
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
        match self.effect(handle) {
            Some(effect) => effect.apply(name, usage),
            None => Err(ActionError::impossible(format!("The {name} cannot be used."))),
        }
    }
}
