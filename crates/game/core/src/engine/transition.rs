//! Action transition dispatch.

use crate::action::{Action, ActionContext, ActionOutcome, ActionTransition};
use crate::error::ActionError;

/// Runs a transition: validation first, mutation only if it passed.
#[inline]
pub(crate) fn drive_transition<T>(
    transition: &T,
    ctx: &mut ActionContext<'_>,
) -> Result<T::Output, ActionError>
where
    T: ActionTransition,
{
    transition.pre_validate(ctx)?;
    transition.apply(ctx)
}

/// Routes an action to its transition and folds the output into an
/// [`ActionOutcome`].
pub fn execute_transition(
    action: &Action,
    ctx: &mut ActionContext<'_>,
) -> Result<ActionOutcome, ActionError> {
    match action {
        Action::Wait(transition) => {
            drive_transition(transition, ctx)?;
            Ok(ActionOutcome::Waited)
        }
        Action::Move(transition) => drive_transition(transition, ctx).map(Into::into),
        Action::Melee(transition) => drive_transition(transition, ctx).map(Into::into),
        Action::Bump(transition) => drive_transition(transition, ctx),
        Action::Pickup(transition) => {
            let item = drive_transition(transition, ctx)?;
            Ok(ActionOutcome::PickedUp { item })
        }
        Action::Drop(transition) => {
            let item = drive_transition(transition, ctx)?;
            Ok(ActionOutcome::Dropped { item })
        }
        Action::Equip(transition) => {
            let change = drive_transition(transition, ctx)?;
            Ok(ActionOutcome::Equipped {
                item: transition.item,
                slot: change.slot,
                equipped: change.equipped,
            })
        }
        Action::UseItem(transition) => {
            let consumption = drive_transition(transition, ctx)?;
            Ok(ActionOutcome::Used {
                item: transition.item,
                consumption,
            })
        }
        Action::TakeStairs(transition) => {
            let floor = drive_transition(transition, ctx)?;
            Ok(ActionOutcome::Descended { floor })
        }
        Action::Converse(transition) => {
            let (with, in_party) = drive_transition(transition, ctx)?;
            Ok(ActionOutcome::Conversed { with, in_party })
        }
    }
}
