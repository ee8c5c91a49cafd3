//! Actor templates.
//!
//! Templates describe everything about an actor except its id and position.
//! Content crates load them from RON and spawn them into [`ActorState`]s.

use crate::ai::Behavior;
use crate::state::{ActorState, EntityId, Position};
use crate::stats::CombatStats;

/// Which decision strategy a spawned actor starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorKind {
    PlayerControlled,
    #[default]
    HostileMelee,
    HostileRanged {
        max_range: u32,
        min_range: u32,
    },
    FriendlyFollower,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp: u32,
    pub defense: i32,
    pub power: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pen: i32,
    #[cfg_attr(feature = "serde", serde(default = "default_speed"))]
    pub ms: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_speed"))]
    pub qn: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub luck: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equip_rate: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory_capacity: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub behavior: BehaviorKind,
}

#[cfg(feature = "serde")]
fn default_speed() -> u32 {
    ActorTemplate::DEFAULT_SPEED
}

impl ActorTemplate {
    pub const DEFAULT_SPEED: u32 = 100;

    pub fn new(
        name: impl Into<String>,
        hp: u32,
        defense: i32,
        power: i32,
        pen: i32,
        behavior: BehaviorKind,
    ) -> Self {
        Self {
            name: name.into(),
            hp,
            mp: 0,
            defense,
            power,
            pen,
            ms: Self::DEFAULT_SPEED,
            qn: Self::DEFAULT_SPEED,
            luck: 0,
            equip_rate: 0,
            inventory_capacity: 0,
            behavior,
        }
    }

    pub fn with_speed(mut self, ms: u32, qn: u32) -> Self {
        self.ms = ms;
        self.qn = qn;
        self
    }

    pub fn with_inventory(mut self, capacity: usize) -> Self {
        self.inventory_capacity = capacity;
        self
    }

    pub fn with_mp(mut self, mp: u32) -> Self {
        self.mp = mp;
        self
    }

    pub fn stats(&self) -> CombatStats {
        let mut stats = CombatStats::new(self.hp, self.defense, self.power, self.pen)
            .with_speed(self.ms, self.qn)
            .with_mp(self.mp);
        stats.luck = self.luck;
        stats.equip_rate = self.equip_rate;
        stats
    }

    pub fn instantiate(&self, id: EntityId, position: Position) -> ActorState {
        ActorState::new(
            id,
            self.name.clone(),
            position,
            self.stats(),
            Behavior::from_kind(self.behavior),
        )
        .with_inventory_capacity(self.inventory_capacity)
    }
}
