//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the engine, oracles, and action providers so clients
//! can bubble them up with consistent context.

use barbarian_core::{ActionError, ErrorSeverity, GameError, OracleError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("actor template '{0}' is missing from the catalog")]
    MissingTemplate(String),

    #[error("action provider failed: {0}")]
    Provider(String),

    #[error("no player in the world")]
    NoPlayer,

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingTemplate(_) | Self::NoPlayer => ErrorSeverity::Fatal,
            Self::Provider(_) => ErrorSeverity::Internal,
            Self::Action(inner) => inner.severity(),
            Self::Oracle(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTemplate(_) => "RUNTIME_MISSING_TEMPLATE",
            Self::Provider(_) => "RUNTIME_PROVIDER",
            Self::NoPlayer => "RUNTIME_NO_PLAYER",
            Self::Action(inner) => inner.error_code(),
            Self::Oracle(inner) => inner.error_code(),
        }
    }
}
