//! Melee and ranged enemies.

use super::{MeleeState, RangedState, follow_path, strike};
use crate::action::{Action, ActionContext};
use crate::error::ActionError;
use crate::message::ColorHint;
use crate::pathfinding::{CrowdPolicy, plan_route};
use crate::state::{EntityId, Position};

/// Closest target by aggression-weighted euclidean distance.
fn choose_target(ctx: &ActionContext<'_>, actor: EntityId, state: &MeleeState) -> Option<Position> {
    let origin = ctx.state.entities.actor(actor)?.position;
    ctx.state
        .entities
        .living_actors()
        .filter(|candidate| candidate.id != actor)
        .filter_map(|candidate| {
            let aggression = state.aggression.toward(candidate);
            if aggression <= 0.0 {
                return None;
            }
            Some((origin.euclidean(candidate.position) / aggression, candidate.position))
        })
        .min_by(|(a, _), (b, _)| a.total_cmp(b))
        .map(|(_, position)| position)
}

pub(super) fn decide_melee(
    ctx: &mut ActionContext<'_>,
    actor: EntityId,
    state: &mut MeleeState,
) -> Result<Action, ActionError> {
    let origin = ctx.actor(actor)?.position;
    let Some(target) = choose_target(ctx, actor, state) else {
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

pub(super) fn decide_ranged(
    ctx: &mut ActionContext<'_>,
    actor: EntityId,
    state: &mut RangedState,
) -> Result<Action, ActionError> {
    if state.cooldown > 0 {
        state.cooldown -= 1;
        let name = ctx.actor(actor)?.name.clone();
        ctx.emit(format!("{name} has to reload..."), ColorHint::Neutral);
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
    if !ctx.state.world.map.is_known(origin) {
        return Ok(Action::wait(actor));
    }

    let distance = origin.chebyshev(target);
    if distance < state.min_range {
        return Ok(retreat(ctx, actor, origin, target));
    }
    if distance <= state.max_range {
        state.cooldown = ctx.config.ranged_cooldown;
        return Ok(strike(actor, origin, target));
    }

    state.path =
        plan_route(ctx.state, ctx.config, actor, target, CrowdPolicy::Unconditional).into();
    Ok(follow_path(actor, origin, &mut state.path))
}

/// One step directly away from `threat`, or a wait when that cell is taken.
fn retreat(ctx: &ActionContext<'_>, actor: EntityId, origin: Position, threat: Position) -> Action {
    let (dx, dy) = origin.delta_to(threat);
    let (step_x, step_y) = (-dx.signum(), -dy.signum());
    let destination = origin.offset(step_x, step_y);

    let map = &ctx.state.world.map;
    let free = map.is_walkable(destination)
        && ctx.state.entities.blocking_actor_at(destination).is_none();
    if free {
        Action::move_by(actor, step_x, step_y)
    } else {
        Action::wait(actor)
    }
}
