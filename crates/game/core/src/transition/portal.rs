use crate::action::ActionContext;
use crate::error::ActionError;
use crate::message::ColorHint;
use crate::state::{EntityId, Portal, PortalKind, TerrainKind};

/// Ages every portal by one move, closing the ones that run out.
pub(super) fn decay(ctx: &mut ActionContext<'_>) {
    let world = &mut ctx.state.world;
    let mut expired = Vec::new();
    for portal in &mut world.portals {
        portal.lifetime = portal.lifetime.saturating_sub(1);
        if portal.lifetime == 0 {
            expired.push(*portal);
        }
    }
    world.portals.retain(|portal| portal.lifetime > 0);

    for portal in expired {
        ctx.state
            .world
            .map
            .set_terrain(portal.position, TerrainKind::Floor);
        tracing::info!("{} portal at {} expired", portal.kind, portal.position);
        ctx.emit(
            format!("A {} portal fades away...", portal.kind.colour_name()),
            ColorHint::Portal,
        );
    }
}

/// Opens a forward portal beside the player once enough moves have passed.
///
/// The counter only resets when the portal actually appears, so a blocked
/// spot is retried on every following move.
pub(super) fn try_spawn(ctx: &mut ActionContext<'_>) -> Result<(), ActionError> {
    if ctx.state.world.move_counter < ctx.config.portal_spawn_threshold {
        return Ok(());
    }

    let position = ctx
        .actor(EntityId::PLAYER)?
        .position
        .offset(ctx.config.portal_spawn_offset, 0);
    let map = &ctx.state.world.map;
    let occupied = map
        .terrain(position)
        .and_then(|terrain| terrain.portal_kind())
        .is_some()
        || ctx.state.entities.blocking_actor_at(position).is_some();
    if !map.is_walkable(position) || occupied {
        tracing::debug!("portal spot {} is blocked", position);
        return Ok(());
    }

    let kind = PortalKind::Forward;
    ctx.state.world.map.set_terrain(position, kind.terrain());
    ctx.state.world.portals.push(Portal {
        position,
        lifetime: ctx.config.portal_lifetime,
        kind,
    });
    ctx.state.world.move_counter = 0;

    tracing::info!("{} portal opened at {}", kind, position);
    ctx.emit(
        format!("A mysterious {} portal appears nearby!", kind.colour_name()),
        ColorHint::Portal,
    );
    Ok(())
}
