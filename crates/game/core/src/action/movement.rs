use crate::action::{ActionContext, ActionTransition, MeleeAction};
use crate::engine::drive_transition;
use crate::error::ActionError;
use crate::state::{Direction, EntityId, FloorId, Position};
use crate::transition;

pub(crate) const BLOCKED: &str = "That way is blocked.";

/// Step by `(dx, dy)` from the actor's current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved { from: Position, to: Position },
    /// The destination was a portal; the party now stands on another floor.
    Transitioned { floor: FloorId },
}

impl MoveAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    pub fn towards(actor: EntityId, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(actor, dx, dy)
    }

    fn destination(&self, ctx: &ActionContext<'_>) -> Result<Position, ActionError> {
        Ok(ctx.actor(self.actor)?.position.offset(self.dx, self.dy))
    }
}

impl ActionTransition for MoveAction {
    type Output = MoveOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        let destination = self.destination(ctx)?;
        let map = &ctx.state.world.map;

        if !map.in_bounds(destination) {
            return Err(ActionError::impossible(BLOCKED));
        }
        if !map.is_walkable(destination) {
            return Err(ActionError::impossible(BLOCKED));
        }
        if ctx
            .state
            .entities
            .blocking_actor_at(destination)
            .is_some()
        {
            return Err(ActionError::impossible(BLOCKED));
        }
        Ok(())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        let from = ctx.actor(self.actor)?.position;
        let to = from.offset(self.dx, self.dy);

        if self.actor.is_player() {
            transition::on_player_move(ctx)?;
        }

        // Portal bookkeeping above may have changed the destination tile.
        let portal = ctx
            .state
            .world
            .map
            .terrain(to)
            .and_then(|terrain| terrain.portal_kind());
        if let Some(kind) = portal {
            let floor = transition::enter_portal(ctx, self.actor, kind)?;
            return Ok(MoveOutcome::Transitioned { floor });
        }

        ctx.actor_mut(self.actor)?.position = to;
        Ok(MoveOutcome::Moved { from, to })
    }
}

/// Attack whatever stands in the way, otherwise walk there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl BumpAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    pub fn towards(actor: EntityId, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(actor, dx, dy)
    }

    /// Resolves the bump into the concrete action it stands for.
    pub fn resolve(&self, ctx: &ActionContext<'_>) -> Result<BumpTarget, ActionError> {
        let destination = ctx.actor(self.actor)?.position.offset(self.dx, self.dy);
        if ctx.state.entities.actor_at(destination).is_some() {
            Ok(BumpTarget::Melee(MeleeAction::new(self.actor, self.dx, self.dy)))
        } else {
            Ok(BumpTarget::Move(MoveAction::new(self.actor, self.dx, self.dy)))
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BumpTarget {
    Melee(MeleeAction),
    Move(MoveAction),
}

impl ActionTransition for BumpAction {
    type Output = super::ActionOutcome;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        match self.resolve(ctx)? {
            BumpTarget::Melee(melee) => drive_transition(&melee, ctx).map(Into::into),
            BumpTarget::Move(movement) => drive_transition(&movement, ctx).map(Into::into),
        }
    }
}
