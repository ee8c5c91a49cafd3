use super::ConfusedState;
use crate::action::{Action, ActionContext};
use crate::env::RollContext;
use crate::error::ActionError;
use crate::message::ColorHint;
use crate::state::{Direction, EntityId};

/// Stumbles in a random direction, attacking whatever is there.
///
/// The turn the counter runs out is spent recovering; [`super::decide`]
/// swaps the previous behavior back in once `turns_remaining` hits zero.
pub(super) fn decide(
    ctx: &mut ActionContext<'_>,
    actor: EntityId,
    state: &mut ConfusedState,
) -> Result<Action, ActionError> {
    state.turns_remaining = state.turns_remaining.saturating_sub(1);
    if state.turns_remaining == 0 {
        let name = ctx.actor(actor)?.name.clone();
        ctx.emit(
            format!("The {name} is no longer confused."),
            ColorHint::StatusEnded,
        );
        return Ok(Action::wait(actor));
    }

    let index = ctx.pick(actor, RollContext::Stumble, Direction::ALL.len())?;
    Ok(Action::bump(actor, Direction::ALL[index]))
}

#[cfg(test)]
mod tests {
    use crate::action::Action;
    use crate::ai::{Behavior, MeleeState};
    use crate::state::{Direction, Position};
    use crate::testing::{self, Fixture};

    #[test]
    fn stumbles_then_recovers_after_exactly_the_given_turns() {
        let mut fx = Fixture::new(10, 10)
            .with_player(Position::new(1, 1))
            .with_die(3);
        let goblin = fx.spawn(&testing::goblin(), Position::new(5, 5));
        let original = fx.actor(goblin).behavior.clone().unwrap();
        fx.state.entities.actor_mut(goblin).unwrap().behavior = Some(original.clone().confused(3));

        // FixedRng(3) picks index 2 of the compass.
        assert_eq!(fx.decide(goblin), Action::bump(goblin, Direction::ALL[2]));
        assert_eq!(fx.decide(goblin), Action::bump(goblin, Direction::ALL[2]));
        assert!(matches!(fx.actor(goblin).behavior, Some(Behavior::Confused(_))));

        assert_eq!(fx.decide(goblin), Action::wait(goblin));
        assert_eq!(fx.actor(goblin).behavior, Some(original));
        assert_eq!(fx.texts(), vec!["The Goblin is no longer confused."]);
    }

    #[test]
    fn zero_turns_recovers_immediately() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(1, 1));
        let goblin = fx.spawn(&testing::goblin(), Position::new(5, 5));
        fx.state.entities.actor_mut(goblin).unwrap().behavior =
            Some(Behavior::HostileMelee(MeleeState::default()).confused(0));

        assert_eq!(fx.decide(goblin), Action::wait(goblin));
        assert_eq!(
            fx.actor(goblin).behavior,
            Some(Behavior::HostileMelee(MeleeState::default()))
        );
    }
}
