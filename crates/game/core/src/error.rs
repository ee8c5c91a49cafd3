//! Common error infrastructure for barbarian-core.
//!
//! Gameplay failures (a blocked move, an empty tile, a full pack) are all
//! represented by [`ImpossibleAction`], a recoverable error that carries the
//! player-facing reason. Wiring problems such as a missing oracle or an
//! unknown entity surface through [`ActionError`]'s other variants.

use crate::env::OracleError;
use crate::state::EntityId;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the actor may try something else this turn
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistencies that require investigation
/// - **Fatal**: unrecoverable errors indicating a misconfigured game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all barbarian-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// The single gameplay failure kind.
///
/// Raised when an action cannot be performed in the current world. The reason
/// is shown to the player verbatim, so it is written as a complete sentence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{reason}")]
pub struct ImpossibleAction {
    pub reason: String,
}

impl ImpossibleAction {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl GameError for ImpossibleAction {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        "ACTION_IMPOSSIBLE"
    }
}

/// Errors that can occur while validating or executing an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Impossible(#[from] ImpossibleAction),

    #[error("entity {0} not found")]
    ActorNotFound(EntityId),

    #[error("entity {0} is dead and cannot act")]
    ActorDead(EntityId),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ActionError {
    /// Shorthand for a gameplay failure with the given reason.
    pub fn impossible(reason: impl Into<String>) -> Self {
        Self::Impossible(ImpossibleAction::new(reason))
    }

    /// Returns the player-facing reason when this is a gameplay failure.
    pub fn as_impossible(&self) -> Option<&ImpossibleAction> {
        match self {
            Self::Impossible(inner) => Some(inner),
            _ => None,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Impossible(inner) => inner.severity(),
            Self::ActorNotFound(_) | Self::ActorDead(_) => ErrorSeverity::Validation,
            Self::Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Impossible(inner) => inner.error_code(),
            Self::ActorNotFound(_) => "ACTOR_NOT_FOUND",
            Self::ActorDead(_) => "ACTOR_DEAD",
            Self::Oracle(inner) => inner.error_code(),
        }
    }
}
