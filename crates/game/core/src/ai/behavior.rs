use std::collections::VecDeque;

use super::AggressionTable;
use crate::env::BehaviorKind;
use crate::state::{EntityId, Position};

/// Route still to walk, next cell first. The origin is never included.
pub type CachedPath = VecDeque<Position>;

/// Decision strategy of a living actor.
///
/// Dead actors carry no behavior at all (`ActorState::behavior == None`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Behavior {
    /// Hunts the player the way the player would be driven.
    PlayerControlled(ControlledState),
    HostileMelee(MeleeState),
    HostileRanged(RangedState),
    FriendlyFollower(FollowerState),
    Confused(ConfusedState),
    /// Reserved; always waits.
    Feared,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlledState {
    pub path: CachedPath,
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeState {
    pub aggression: AggressionTable,
    pub path: CachedPath,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangedState {
    pub max_range: u32,
    pub min_range: u32,
    /// Turns left before the next shot.
    pub cooldown: u32,
    pub path: CachedPath,
}

impl RangedState {
    pub fn new(max_range: u32, min_range: u32) -> Self {
        Self {
            max_range,
            min_range,
            cooldown: 0,
            path: CachedPath::new(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FollowerState {
    pub in_party: bool,
    /// Last hostile this follower engaged.
    pub current_target: Option<EntityId>,
    pub path: CachedPath,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfusedState {
    pub previous: Box<Behavior>,
    pub turns_remaining: u32,
}

impl Behavior {
    pub fn from_kind(kind: BehaviorKind) -> Self {
        match kind {
            BehaviorKind::PlayerControlled => Behavior::PlayerControlled(ControlledState::default()),
            BehaviorKind::HostileMelee => Behavior::HostileMelee(MeleeState::default()),
            BehaviorKind::HostileRanged {
                max_range,
                min_range,
            } => Behavior::HostileRanged(RangedState::new(max_range, min_range)),
            BehaviorKind::FriendlyFollower => Behavior::FriendlyFollower(FollowerState::default()),
        }
    }

    /// Wraps the current behavior in a confusion lasting `turns` turns.
    pub fn confused(self, turns: u32) -> Self {
        Behavior::Confused(ConfusedState {
            previous: Box::new(self),
            turns_remaining: turns,
        })
    }

    /// Drops any cached route, e.g. after the map was replaced.
    pub fn forget_path(&mut self) {
        match self {
            Behavior::PlayerControlled(ControlledState { path })
            | Behavior::HostileMelee(MeleeState { path, .. })
            | Behavior::HostileRanged(RangedState { path, .. })
            | Behavior::FriendlyFollower(FollowerState { path, .. }) => path.clear(),
            Behavior::Confused(confused) => confused.previous.forget_path(),
            Behavior::Feared => {}
        }
    }

    pub fn is_hostile(&self) -> bool {
        matches!(self, Behavior::HostileMelee(_) | Behavior::HostileRanged(_))
    }

    pub fn is_friendly(&self) -> bool {
        matches!(self, Behavior::FriendlyFollower(_))
    }

    pub fn in_party(&self) -> bool {
        matches!(self, Behavior::FriendlyFollower(follower) if follower.in_party)
    }

    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Behavior::PlayerControlled(_) => "player_controlled",
            Behavior::HostileMelee(_) => "hostile_melee",
            Behavior::HostileRanged(_) => "hostile_ranged",
            Behavior::FriendlyFollower(_) => "friendly_follower",
            Behavior::Confused(_) => "confused",
            Behavior::Feared => "feared",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_map_to_fresh_states() {
        let ranged = Behavior::from_kind(BehaviorKind::HostileRanged {
            max_range: 6,
            min_range: 3,
        });
        assert_eq!(ranged, Behavior::HostileRanged(RangedState::new(6, 3)));
        assert!(ranged.is_hostile());

        let follower = Behavior::from_kind(BehaviorKind::FriendlyFollower);
        assert!(follower.is_friendly());
        assert!(!follower.in_party());
    }

    #[test]
    fn confusion_hides_the_wrapped_category() {
        let confused = Behavior::from_kind(BehaviorKind::HostileMelee).confused(10);
        assert!(!confused.is_hostile());
        let Behavior::Confused(state) = confused else {
            panic!("expected confusion");
        };
        assert_eq!(state.turns_remaining, 10);
        assert_eq!(*state.previous, Behavior::HostileMelee(MeleeState::default()));
    }
}
