//! Decision making for actors the player does not drive.
//!
//! Every living actor carries a [`Behavior`]. Once per eligible turn
//! [`decide`] matches on it and produces exactly one [`Action`]. Missing
//! targets or routes never fail a decision; they degrade to waiting.
//!
//! # Module Structure
//!
//! - `behavior`: the behavior variants and their per-actor memory
//! - `aggression`: target categories and weighting for hostiles
//! - `hostile`: melee and ranged enemies
//! - `follower`: friendly party members
//! - `controlled`: actors driven like the player
//! - `confused`: random stumbling with automatic recovery

mod aggression;
mod behavior;
mod confused;
mod controlled;
mod follower;
mod hostile;

pub use aggression::{AggressionError, AggressionTable, TargetCategory};
pub use behavior::{
    Behavior, CachedPath, ConfusedState, ControlledState, FollowerState, MeleeState, RangedState,
};

use crate::action::{Action, ActionContext};
use crate::error::ActionError;
use crate::state::{EntityId, Position};

/// Chooses the next action for `actor`.
///
/// The behavior is detached from the actor while deciding so the decision
/// can update its own memory (paths, cooldowns, counters) while reading the
/// rest of the world. Dead actors wait.
pub fn decide(ctx: &mut ActionContext<'_>, actor: EntityId) -> Result<Action, ActionError> {
    let Some(mut behavior) = ctx.actor_mut(actor)?.behavior.take() else {
        return Ok(Action::wait(actor));
    };

    let decision = decide_with(ctx, actor, &mut behavior);

    let behavior = match behavior {
        Behavior::Confused(confused) if confused.turns_remaining == 0 => *confused.previous,
        other => other,
    };
    ctx.actor_mut(actor)?.behavior = Some(behavior);

    let action = decision?;
    tracing::debug!("{} decided to {}", actor, action.as_snake_case());
    Ok(action)
}

fn decide_with(
    ctx: &mut ActionContext<'_>,
    actor: EntityId,
    behavior: &mut Behavior,
) -> Result<Action, ActionError> {
    match behavior {
        Behavior::PlayerControlled(state) => controlled::decide(ctx, actor, state),
        Behavior::HostileMelee(state) => hostile::decide_melee(ctx, actor, state),
        Behavior::HostileRanged(state) => hostile::decide_ranged(ctx, actor, state),
        Behavior::FriendlyFollower(state) => follower::decide(ctx, actor, state),
        Behavior::Confused(state) => confused::decide(ctx, actor, state),
        Behavior::Feared => Ok(Action::wait(actor)),
    }
}

/// Walks the next cell of a cached route, or waits when it is used up.
fn follow_path(actor: EntityId, origin: Position, path: &mut CachedPath) -> Action {
    match path.pop_front() {
        Some(next) => Action::step(actor, origin, next),
        None => Action::wait(actor),
    }
}

/// Attack the neighbour at `target`.
fn strike(actor: EntityId, origin: Position, target: Position) -> Action {
    let (dx, dy) = origin.delta_to(target);
    Action::melee(actor, dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;
    use crate::testing::{self, Fixture};

    #[test]
    fn dead_actors_wait() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let goblin = fx.spawn(&testing::goblin(), Position::new(3, 2));
        fx.state.entities.actor_mut(goblin).unwrap().mark_dead();

        assert_eq!(fx.decide(goblin), Action::wait(goblin));
        assert_eq!(fx.actor(goblin).behavior, None);
    }

    #[test]
    fn feared_always_waits() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let goblin = fx.spawn(&testing::goblin(), Position::new(3, 2));
        fx.state.entities.actor_mut(goblin).unwrap().behavior = Some(Behavior::Feared);

        assert_eq!(fx.decide(goblin), Action::wait(goblin));
        assert_eq!(fx.actor(goblin).behavior, Some(Behavior::Feared));
    }

    #[test]
    fn missing_actor_is_a_wiring_error() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let mut ctx = fx.ctx();
        assert_eq!(
            decide(&mut ctx, EntityId(77)),
            Err(ActionError::ActorNotFound(EntityId(77)))
        );
    }
}
