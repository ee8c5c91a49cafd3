use super::ActionContext;
use crate::error::ActionError;
use crate::state::EntityId;

/// Defines how a concrete action validates and mutates the world.
///
/// `pre_validate` must reject every gameplay failure before `apply` touches
/// anything, so a rejected action leaves the world unchanged. `apply` may
/// assume `pre_validate` already succeeded.
pub trait ActionTransition {
    type Output;

    fn actor(&self) -> EntityId;

    fn pre_validate(&self, _ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        Ok(())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError>;
}
