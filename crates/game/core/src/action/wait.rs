use crate::action::{ActionContext, ActionTransition};
use crate::error::ActionError;
use crate::state::EntityId;

/// Wait action - actor passes their turn without performing any action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    type Output = ();

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, _ctx: &mut ActionContext<'_>) -> Result<(), ActionError> {
        Ok(())
    }
}
