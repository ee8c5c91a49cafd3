//! World transitions triggered from inside actions.
//!
//! Player movement drives the global move counter: periodic regeneration,
//! portal decay and portal spawning. Portals and stairs move the party to a
//! freshly generated floor.

mod floor;
mod portal;

pub use floor::{Arrival, change_floor};

use crate::action::ActionContext;
use crate::error::ActionError;
use crate::message::ColorHint;
use crate::state::{EntityId, FloorId, PortalKind};

/// Bookkeeping for one successful player move, run before the player leaves
/// its cell.
pub fn on_player_move(ctx: &mut ActionContext<'_>) -> Result<(), ActionError> {
    ctx.state.world.move_counter += 1;

    let interval = ctx.config.heal_interval;
    if interval > 0 && ctx.state.world.move_counter % interval == 0 {
        let amount = ctx.config.heal_amount;
        let recovered = ctx.actor_mut(EntityId::PLAYER)?.stats.heal(amount);
        tracing::debug!("move regeneration restored {} hp", recovered);
    }

    portal::decay(ctx);
    portal::try_spawn(ctx)
}

/// Sends the party through a portal of the given kind.
pub fn enter_portal(
    ctx: &mut ActionContext<'_>,
    actor: EntityId,
    kind: PortalKind,
) -> Result<FloorId, ActionError> {
    let (floor, text) = match kind {
        PortalKind::Forward => (
            FloorId(ctx.config.forward_floor),
            "You step through the blue portal and enter the dungeon!",
        ),
        PortalKind::Return => (
            FloorId(ctx.config.return_floor),
            "You step through the red portal and return to the city!",
        ),
    };
    change_floor(ctx, actor, floor, Arrival::Center)?;
    ctx.emit(text, ColorHint::Portal);
    Ok(floor)
}

/// Takes the party one floor deeper, arriving at the new floor's entry.
pub fn descend(ctx: &mut ActionContext<'_>, actor: EntityId) -> Result<FloorId, ActionError> {
    let floor = ctx.state.world.current_floor.next();
    change_floor(ctx, actor, floor, Arrival::Entry)?;
    Ok(floor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionOutcome, MoveAction};
    use crate::ai::Behavior;
    use crate::state::{Portal, Position, TerrainKind};
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

    #[test]
    fn thousandth_move_opens_forward_portal() {
        let mut fx = Fixture::new(12, 8).with_player(Position::new(3, 3));
        fx.state.world.move_counter = 999;

        fx.run(MoveAction::new(EntityId::PLAYER, 0, 1)).unwrap();

        let portal = Portal {
            position: Position::new(5, 3),
            lifetime: 10,
            kind: PortalKind::Forward,
        };
        assert_eq!(fx.state.world.portals, vec![portal]);
        assert_eq!(
            fx.state.world.map.terrain(portal.position),
            Some(TerrainKind::PortalBlue)
        );
        assert_eq!(fx.state.world.move_counter, 0);
        assert_eq!(fx.texts(), vec!["A mysterious blue portal appears nearby!"]);
    }

    #[test]
    fn blocked_spot_keeps_counting() {
        let mut fx = Fixture::new(12, 8).with_player(Position::new(9, 3));
        fx.state.world.move_counter = 999;

        // (11, 3) is the east wall.
        fx.run(MoveAction::new(EntityId::PLAYER, 0, 1)).unwrap();

        assert!(fx.state.world.portals.is_empty());
        assert_eq!(fx.state.world.move_counter, 1000);
    }

    #[test]
    fn occupied_spot_gets_no_portal() {
        let mut fx = Fixture::new(12, 8).with_player(Position::new(3, 3));
        let goblin = fx.spawn(&testing::goblin(), Position::new(5, 3));
        fx.state.world.move_counter = 999;

        fx.run(MoveAction::new(EntityId::PLAYER, 0, 1)).unwrap();

        assert!(fx.state.world.portals.is_empty());
        assert_eq!(
            fx.state.world.map.terrain(Position::new(5, 3)),
            Some(TerrainKind::Floor)
        );
        assert_eq!(fx.actor(goblin).position, Position::new(5, 3));
        assert_eq!(fx.state.world.move_counter, 1000);
    }

    #[test]
    fn existing_portal_is_not_doubled() {
        let mut fx = Fixture::new(12, 8).with_player(Position::new(3, 3));
        let position = Position::new(5, 3);
        fx.state.world.map.set_terrain(position, TerrainKind::PortalBlue);
        fx.state.world.portals.push(Portal {
            position,
            lifetime: 5,
            kind: PortalKind::Forward,
        });
        fx.state.world.move_counter = 999;

        fx.run(MoveAction::new(EntityId::PLAYER, 0, 1)).unwrap();

        assert_eq!(fx.state.world.portals.len(), 1);
        assert_eq!(fx.state.world.portals[0].lifetime, 4);
        assert_eq!(fx.state.world.move_counter, 1000);
    }

    #[test]
    fn portals_fade_after_their_lifetime() {
        let mut fx = Fixture::new(12, 8).with_player(Position::new(2, 2));
        let position = Position::new(8, 5);
        fx.state.world.map.set_terrain(position, TerrainKind::PortalBlue);
        fx.state.world.portals.push(Portal {
            position,
            lifetime: 2,
            kind: PortalKind::Forward,
        });

        fx.run(MoveAction::new(EntityId::PLAYER, 1, 0)).unwrap();
        assert_eq!(fx.state.world.portals[0].lifetime, 1);
        assert!(fx.texts().is_empty());

        fx.run(MoveAction::new(EntityId::PLAYER, -1, 0)).unwrap();
        assert!(fx.state.world.portals.is_empty());
        assert_eq!(fx.state.world.map.terrain(position), Some(TerrainKind::Floor));
        assert_eq!(fx.texts(), vec!["A blue portal fades away..."]);
    }

    #[test]
    fn portal_moves_party_around_map_centre() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        fx.state
            .world
            .map
            .set_terrain(Position::new(3, 2), TerrainKind::PortalBlue);
        let west = recruit(&mut fx, Position::new(1, 2));
        let east = recruit(&mut fx, Position::new(2, 3));
        let goblin = fx.spawn(&testing::goblin(), Position::new(6, 6));
        fx.state.spawn_item(testing::DAGGER, Position::new(4, 4));

        let outcome = fx.run(MoveAction::new(EntityId::PLAYER, 1, 0)).unwrap();

        assert_eq!(outcome, ActionOutcome::Transitioned { floor: FloorId(1) });
        let center = fx.state.world.map.center();
        assert_eq!(fx.actor(EntityId::PLAYER).position, center);
        assert_eq!(fx.actor(west).position, center.offset(-1, 0));
        assert_eq!(fx.actor(east).position, center.offset(1, 0));
        assert!(fx.state.entities.actor(goblin).is_none());
        assert!(fx.state.entities.items.is_empty());
        assert_eq!(
            fx.texts().last(),
            Some(&"You step through the blue portal and enter the dungeon!")
        );
    }

    #[test]
    fn red_portal_returns_to_city() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        fx.state.world.current_floor = FloorId(3);
        fx.state
            .world
            .map
            .set_terrain(Position::new(2, 3), TerrainKind::PortalRed);

        let outcome = fx.run(MoveAction::new(EntityId::PLAYER, 0, 1)).unwrap();

        assert_eq!(outcome, ActionOutcome::Transitioned { floor: FloorId::CITY });
        assert_eq!(fx.state.world.current_floor, FloorId::CITY);
        assert!(fx.state.world.portals.is_empty());
    }

    #[test]
    fn stairs_bring_followers_and_spawns() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let npc = recruit(&mut fx, Position::new(3, 3));
        let loner = fx.spawn(&testing::npc(), Position::new(5, 5));

        let mut ctx = fx.ctx();
        let floor = descend(&mut ctx, EntityId::PLAYER).unwrap();
        drop(ctx);

        assert_eq!(floor, FloorId(1));
        assert_eq!(fx.actor(EntityId::PLAYER).position, testing::FLOOR_ENTRY);
        assert_eq!(fx.actor(npc).position, testing::FLOOR_ENTRY.offset(-1, 0));
        assert!(fx.state.entities.actor(loner).is_none());
        let spawned: Vec<_> = fx
            .state
            .entities
            .actors
            .iter()
            .filter(|actor| actor.name == "Goblin")
            .collect();
        assert_eq!(spawned.len(), 1);
        assert_eq!(spawned[0].position, testing::FLOOR_SPAWN);
    }

    #[test]
    fn missing_floor_generator_is_an_oracle_error() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let mut ctx = fx.ctx();
        ctx.env = crate::env::GameEnv::empty();
        let error = descend(&mut ctx, EntityId::PLAYER).unwrap_err();
        assert_eq!(
            error,
            ActionError::Oracle(crate::env::OracleError::FloorsNotAvailable)
        );
    }
}
