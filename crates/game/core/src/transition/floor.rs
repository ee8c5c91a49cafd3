use crate::action::ActionContext;
use crate::env::{GeneratedFloor, RollContext, compute_seed};
use crate::error::ActionError;
use crate::state::{EntityId, FloorId, Position};

/// Cells around the arrival point taken by party members, in order.
const PARTY_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Where the leader lands on the new floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrival {
    /// Centre of the new map (portals).
    Center,
    /// The generator's entry point (stairs).
    Entry,
}

/// Replaces the active floor and brings the party along.
///
/// The leader lands on the arrival point and party members fill the four
/// neighbouring cells (west, east, north, south, then around again). The
/// player always travels; when it is not the leader it lands on the entry
/// point. Every other actor and every ground item of the old floor is
/// discarded, as are portals and cached routes. The move counter carries over.
pub fn change_floor(
    ctx: &mut ActionContext<'_>,
    leader: EntityId,
    floor: FloorId,
    arrival: Arrival,
) -> Result<Position, ActionError> {
    ctx.actor(leader)?;
    let seed = compute_seed(
        ctx.state.game_seed,
        ctx.state.nonce,
        leader.0,
        RollContext::Floor,
    );
    let GeneratedFloor {
        map,
        entry,
        actors,
        items,
    } = ctx.env.floors()?.generate(floor, seed)?;

    let anchor = match arrival {
        Arrival::Center => map.center(),
        Arrival::Entry => entry,
    };

    let entities = &mut ctx.state.entities;
    entities
        .actors
        .retain(|actor| actor.id == leader || actor.id.is_player() || actor.in_party());
    entities.items.clear();

    let mut party = 0;
    for actor in &mut entities.actors {
        if let Some(behavior) = actor.behavior.as_mut() {
            behavior.forget_path();
        }
        actor.position = if actor.id == leader {
            anchor
        } else if actor.in_party() {
            let (dx, dy) = PARTY_OFFSETS[party % PARTY_OFFSETS.len()];
            party += 1;
            anchor.offset(dx, dy)
        } else {
            entry
        };
    }

    let world = &mut ctx.state.world;
    world.map = map;
    world.current_floor = floor;
    world.portals.clear();

    for spawn in &actors {
        ctx.state.spawn_actor(&spawn.template, spawn.position);
    }
    for spawn in &items {
        ctx.state.spawn_item(spawn.handle, spawn.position);
    }

    tracing::info!(
        "{} led {} party members to {} ({} actors, {} items spawned)",
        leader,
        party,
        floor,
        actors.len(),
        items.len()
    );
    Ok(anchor)
}
