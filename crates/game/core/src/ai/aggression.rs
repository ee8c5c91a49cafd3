use crate::error::{ErrorSeverity, GameError};
use crate::state::ActorState;

/// Who a potential target is, from a hostile actor's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetCategory {
    Player,
    Friendly,
    Hostile,
}

impl TargetCategory {
    /// Categorises a living actor. Actors without a recognised behavior
    /// (corpses, confused or feared actors) are never targeted.
    pub fn of(actor: &ActorState) -> Option<Self> {
        if actor.id.is_player() {
            Some(Self::Player)
        } else if actor.is_friendly() {
            Some(Self::Friendly)
        } else if actor.is_hostile() {
            Some(Self::Hostile)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum AggressionError {
    #[error("aggression toward {category} must be within 0.0..=1.0, got {value}")]
    OutOfRange { category: TargetCategory, value: f32 },
}

impl GameError for AggressionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "AGGRESSION_OUT_OF_RANGE"
    }
}

/// Weighting applied to each target category when a hostile picks a victim.
///
/// The effective distance to a target is `distance / weight`, so a weight of
/// 0.5 makes a target count as twice as far away. Categories weighted 0 are
/// ignored entirely.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AggressionTable {
    player: f32,
    friendly: f32,
    hostile: f32,
}

impl AggressionTable {
    pub const DEFAULT_PLAYER: f32 = 1.0;
    pub const DEFAULT_FRIENDLY: f32 = 0.5;
    pub const DEFAULT_HOSTILE: f32 = 0.0;

    pub fn get(&self, category: TargetCategory) -> f32 {
        match category {
            TargetCategory::Player => self.player,
            TargetCategory::Friendly => self.friendly,
            TargetCategory::Hostile => self.hostile,
        }
    }

    /// # Errors
    ///
    /// Rejects weights outside `0.0..=1.0` (including NaN) and leaves the
    /// table unchanged.
    pub fn set(&mut self, category: TargetCategory, value: f32) -> Result<(), AggressionError> {
        if !(0.0..=1.0).contains(&value) {
            return Err(AggressionError::OutOfRange { category, value });
        }
        match category {
            TargetCategory::Player => self.player = value,
            TargetCategory::Friendly => self.friendly = value,
            TargetCategory::Hostile => self.hostile = value,
        }
        Ok(())
    }

    /// Weight toward a specific actor; 0 for anything uncategorised.
    pub fn toward(&self, target: &ActorState) -> f32 {
        TargetCategory::of(target).map_or(0.0, |category| self.get(category))
    }
}

impl Default for AggressionTable {
    fn default() -> Self {
        Self {
            player: Self::DEFAULT_PLAYER,
            friendly: Self::DEFAULT_FRIENDLY,
            hostile: Self::DEFAULT_HOSTILE,
        }
    }
}
