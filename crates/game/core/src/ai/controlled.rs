use super::{ControlledState, follow_path, strike};
use crate::action::{Action, ActionContext};
use crate::error::ActionError;
use crate::pathfinding::{CrowdPolicy, plan_route};
use crate::state::EntityId;

/// Drives a non-player actor at the player the way a hunting enemy would.
/// The player itself never gets a decision here.
pub(super) fn decide(
    ctx: &mut ActionContext<'_>,
    actor: EntityId,
    state: &mut ControlledState,
) -> Result<Action, ActionError> {
    if actor.is_player() {
        return Ok(Action::wait(actor));
    }
    let origin = ctx.actor(actor)?.position;
    let Some(target) = ctx
        .state
        .player()
        .filter(|player| player.is_alive())
        .map(|player| player.position)
    else {
        return Ok(Action::wait(actor));
    };

    if ctx.state.world.map.is_visible(origin) {
        if origin.chebyshev(target) <= 1 {
            return Ok(strike(actor, origin, target));
        }
        state.path = plan_route(ctx.state, ctx.config, actor, target, CrowdPolicy::SkipUnwalkable)
            .into();
    }
    Ok(follow_path(actor, origin, &mut state.path))
}

#[cfg(test)]
mod tests {
    use crate::action::Action;
    use crate::ai::{Behavior, ControlledState};
    use crate::state::{EntityId, Position};
    use crate::testing::{self, Fixture};

    fn possess(fx: &mut Fixture, position: Position) -> EntityId {
        let id = fx.spawn(&testing::goblin(), position);
        fx.state.entities.actor_mut(id).unwrap().behavior =
            Some(Behavior::PlayerControlled(ControlledState::default()));
        id
    }

    #[test]
    fn hunts_and_strikes_the_player() {
        let mut fx = Fixture::new(12, 5).with_player(Position::new(1, 2));
        let puppet = possess(&mut fx, Position::new(5, 2));
        assert_eq!(fx.decide(puppet), Action::move_by(puppet, -1, 0));

        fx.state.entities.actor_mut(puppet).unwrap().position = Position::new(2, 3);
        assert_eq!(fx.decide(puppet), Action::melee(puppet, -1, -1));
    }

    #[test]
    fn player_itself_waits() {
        let mut fx = Fixture::new(12, 5).with_player(Position::new(1, 2));
        assert_eq!(fx.decide(EntityId::PLAYER), Action::wait(EntityId::PLAYER));
    }
}
