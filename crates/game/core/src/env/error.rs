//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{FloorId, ItemHandle};

/// Errors that occur when accessing Oracle data.
///
/// A missing oracle means the engine was wired incorrectly, so those errors are
/// fatal; unknown handles point at bad content data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("ItemOracle not available")]
    ItemsNotAvailable,

    #[error("FloorGenerator not available")]
    FloorsNotAvailable,

    #[error("RngOracle not available")]
    RngNotAvailable,

    #[error("item definition {0:?} not found")]
    ItemNotFound(ItemHandle),

    #[error("failed to generate {floor}: {reason}")]
    FloorGeneration { floor: FloorId, reason: String },
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            ItemsNotAvailable | FloorsNotAvailable | RngNotAvailable => ErrorSeverity::Fatal,
            ItemNotFound(_) => ErrorSeverity::Validation,
            FloorGeneration { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            ItemsNotAvailable => "ORACLE_ITEMS_NOT_AVAILABLE",
            FloorsNotAvailable => "ORACLE_FLOORS_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ItemNotFound(_) => "ORACLE_ITEM_NOT_FOUND",
            FloorGeneration { .. } => "ORACLE_FLOOR_GENERATION",
        }
    }
}
