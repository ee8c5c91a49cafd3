//! Actor statistics.
//!
//! [`CombatStats`] is the stored block on every actor. Equipment never mutates
//! it; [`EquipmentBonus`] is summed on demand and folded in by
//! [`CombatStats::effective`].

pub mod bonus;
pub mod speed;

pub use bonus::{EffectiveStats, EquipmentBonus};
pub use speed::TurnMeter;

use crate::state::ResourceMeter;

/// Stored combat block for an actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    pub hp: ResourceMeter,
    pub mp: ResourceMeter,
    pub power: i32,
    pub defense: i32,
    /// Penetration, added to the d20 when testing against defense.
    pub pen: i32,
    /// Movement speed fed into the movement meter each tick.
    pub ms: u32,
    /// Quickness fed into the quickness meter each tick.
    pub qn: u32,
    pub luck: i32,
    pub equip_rate: i32,
    pub movement: TurnMeter,
    pub quickness: TurnMeter,
}

impl CombatStats {
    pub fn new(hp: u32, defense: i32, power: i32, pen: i32) -> Self {
        Self {
            hp: ResourceMeter::full(hp),
            mp: ResourceMeter::default(),
            power,
            defense,
            pen,
            ms: 100,
            qn: 100,
            luck: 0,
            equip_rate: 0,
            movement: TurnMeter::new(),
            quickness: TurnMeter::new(),
        }
    }

    pub fn with_speed(mut self, ms: u32, qn: u32) -> Self {
        self.ms = ms;
        self.qn = qn;
        self
    }

    pub fn with_mp(mut self, mp: u32) -> Self {
        self.mp = ResourceMeter::full(mp);
        self
    }

    /// Restores hit points up to the maximum; returns the amount recovered.
    pub fn heal(&mut self, amount: u32) -> u32 {
        self.hp.restore(amount)
    }

    /// Removes hit points, stopping at zero; returns the remaining hp.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.hp.drain(amount);
        self.hp.current
    }

    pub fn effective(&self, bonus: &EquipmentBonus) -> EffectiveStats {
        EffectiveStats {
            power: self.power,
            defense: self.defense + bonus.defense,
            pen: self.pen + bonus.pen,
            ms: (self.ms as i32 + bonus.ms).max(0) as u32,
            qn: (self.qn as i32 + bonus.qn).max(0) as u32,
            luck: self.luck + bonus.luck,
            equip_rate: self.equip_rate + bonus.equip_rate,
            weapon_damage: bonus.weapon_damage,
        }
    }
}
