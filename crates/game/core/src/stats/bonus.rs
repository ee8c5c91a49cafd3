//! Equipment bonuses and the effective stats derived from them.

use crate::env::EquippableStats;

/// Sum of the bonuses granted by everything an actor has equipped.
///
/// The weapon damage range is kept separate because it is rolled per attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquipmentBonus {
    pub weapon_damage: Option<(u32, u32)>,
    pub pen: i32,
    pub defense: i32,
    pub ms: i32,
    pub qn: i32,
    pub luck: i32,
    pub equip_rate: i32,
}

impl EquipmentBonus {
    pub fn add(&mut self, stats: &EquippableStats) {
        if stats.power_max > 0 {
            self.weapon_damage = Some((stats.power_min, stats.power_max));
        }
        self.pen += stats.pen_bonus;
        self.defense += stats.defense_bonus;
        self.ms += stats.ms_bonus;
        self.qn += stats.qn_bonus;
        self.luck += stats.luck_bonus;
        self.equip_rate += stats.equip_rate;
    }
}

/// Stats after equipment bonuses are applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectiveStats {
    pub power: i32,
    pub defense: i32,
    pub pen: i32,
    pub ms: u32,
    pub qn: u32,
    pub luck: i32,
    pub equip_rate: i32,
    pub weapon_damage: Option<(u32, u32)>,
}
