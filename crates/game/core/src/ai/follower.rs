//! Friendly followers fight nearby hostiles and otherwise trail the player.

use super::{FollowerState, strike};
use crate::action::{Action, ActionContext};
use crate::error::ActionError;
use crate::pathfinding::{CrowdPolicy, plan_route};
use crate::state::{EntityId, Position};

pub(super) fn decide(
    ctx: &mut ActionContext<'_>,
    actor: EntityId,
    state: &mut FollowerState,
) -> Result<Action, ActionError> {
    if !state.in_party {
        return Ok(Action::wait(actor));
    }
    let origin = ctx.actor(actor)?.position;

    let nearest_hostile = ctx
        .state
        .entities
        .living_actors()
        .filter(|candidate| candidate.id != actor && candidate.is_hostile())
        .map(|candidate| (origin.euclidean(candidate.position), candidate))
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .filter(|(distance, _)| *distance <= ctx.config.follower_detection_radius)
        .map(|(_, hostile)| (hostile.id, hostile.position));

    if let Some((hostile, position)) = nearest_hostile {
        state.current_target = Some(hostile);
        if origin.chebyshev(position) <= 1 {
            return Ok(strike(actor, origin, position));
        }
        if let Some(action) = step_toward(ctx, actor, origin, position, state) {
            return Ok(action);
        }
    }

    let Some(player) = ctx
        .state
        .player()
        .filter(|player| player.is_alive())
        .map(|player| player.position)
    else {
        return Ok(Action::wait(actor));
    };
    if origin.chebyshev(player) > ctx.config.follower_leash {
        if let Some(action) = step_toward(ctx, actor, origin, player, state) {
            return Ok(action);
        }
    }
    Ok(Action::wait(actor))
}

fn step_toward(
    ctx: &ActionContext<'_>,
    actor: EntityId,
    origin: Position,
    destination: Position,
    state: &mut FollowerState,
) -> Option<Action> {
    state.path =
        plan_route(ctx.state, ctx.config, actor, destination, CrowdPolicy::SkipUnwalkable).into();
    let next = state.path.pop_front()?;
    Some(Action::step(actor, origin, next))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Behavior;
    use crate::state::Position;
    use crate::testing::{self, Fixture};

    fn recruit(fx: &mut Fixture, position: Position) -> EntityId {
        let npc = fx.spawn(&testing::npc(), position);
        if let Some(Behavior::FriendlyFollower(state)) =
            &mut fx.state.entities.actor_mut(npc).unwrap().behavior
        {
            state.in_party = true;
        }
        npc
    }

    fn follower_state(fx: &Fixture, id: EntityId) -> FollowerState {
        match &fx.actor(id).behavior {
            Some(Behavior::FriendlyFollower(state)) => state.clone(),
            other => panic!("expected follower, got {other:?}"),
        }
    }

    #[test]
    fn idle_outside_the_party() {
        let mut fx = Fixture::new(12, 12).with_player(Position::new(1, 1));
        let npc = fx.spawn(&testing::npc(), Position::new(9, 9));
        fx.spawn(&testing::goblin(), Position::new(9, 8));
        assert_eq!(fx.decide(npc), Action::wait(npc));
    }

    #[test]
    fn attacks_adjacent_hostile() {
        let mut fx = Fixture::new(12, 12).with_player(Position::new(1, 1));
        let npc = recruit(&mut fx, Position::new(6, 6));
        let goblin = fx.spawn(&testing::goblin(), Position::new(7, 7));

        assert_eq!(fx.decide(npc), Action::melee(npc, 1, 1));
        assert_eq!(follower_state(&fx, npc).current_target, Some(goblin));
    }

    #[test]
    fn closes_in_on_hostile_within_radius() {
        let mut fx = Fixture::new(14, 5).with_player(Position::new(1, 2));
        let npc = recruit(&mut fx, Position::new(2, 2));
        fx.spawn(&testing::archer(), Position::new(8, 2));
        assert_eq!(fx.decide(npc), Action::move_by(npc, 1, 0));
    }

    #[test]
    fn trails_player_beyond_leash() {
        let mut fx = Fixture::new(14, 5).with_player(Position::new(1, 2));
        let npc = recruit(&mut fx, Position::new(6, 2));
        assert_eq!(fx.decide(npc), Action::move_by(npc, -1, 0));
    }

    #[test]
    fn stays_put_near_player() {
        let mut fx = Fixture::new(14, 5).with_player(Position::new(1, 2));
        let npc = recruit(&mut fx, Position::new(4, 2));
        assert_eq!(fx.decide(npc), Action::wait(npc));
    }

    #[test]
    fn ignores_hostiles_beyond_detection_radius() {
        let mut fx = Fixture::new(20, 5).with_player(Position::new(1, 2));
        let npc = recruit(&mut fx, Position::new(3, 2));
        fx.spawn(&testing::goblin(), Position::new(12, 2));
        assert_eq!(fx.decide(npc), Action::wait(npc));
        assert_eq!(follower_state(&fx, npc).current_target, None);
    }
}
