//! Conversation and stairs.

use crate::action::{ActionContext, ActionTransition};
use crate::ai::Behavior;
use crate::error::ActionError;
use crate::message::ColorHint;
use crate::state::{EntityId, FloorId, TerrainKind};
use crate::transition;

/// Talk to an adjacent friendly NPC, toggling its party membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConverseAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl ConverseAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    fn partner(&self, ctx: &ActionContext<'_>) -> Result<EntityId, ActionError> {
        let origin = ctx.actor(self.actor)?.position;
        let destination = origin.offset(self.dx, self.dy);
        if origin.chebyshev(destination) > 1 {
            return Err(ActionError::impossible(
                "That NPC is too far away to talk to.",
            ));
        }
        ctx.state
            .entities
            .actor_at(destination)
            .filter(|target| target.is_friendly())
            .map(|target| target.id)
            .ok_or_else(|| ActionError::impossible("You can only talk to friendly NPCs nearby."))
    }
}

impl ActionTransition for ConverseAction {
    /// The partner and its party membership afterwards.
    type Output = (EntityId, bool);

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        self.partner(ctx).map(|_| ())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        let partner = self.partner(ctx)?;
        let actor = ctx.actor_mut(partner)?;
        let name = actor.name.clone();
        let Some(Behavior::FriendlyFollower(follower)) = actor.behavior.as_mut() else {
            return Err(ActionError::impossible(
                "You can only talk to friendly NPCs nearby.",
            ));
        };
        follower.in_party = !follower.in_party;
        let in_party = follower.in_party;

        let text = if in_party {
            format!("{name} joined in the group.")
        } else {
            format!("{name} leaved your group.")
        };
        ctx.emit(text, ColorHint::Neutral);
        Ok((partner, in_party))
    }
}

/// Descend the staircase the actor is standing on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeStairsAction {
    pub actor: EntityId,
}

impl TakeStairsAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for TakeStairsAction {
    type Output = FloorId;

    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        let position = ctx.actor(self.actor)?.position;
        if ctx.state.world.map.terrain(position) != Some(TerrainKind::DownStairs) {
            return Err(ActionError::impossible("There are no stairs here."));
        }
        Ok(())
    }

    fn apply(&self, ctx: &mut ActionContext<'_>) -> Result<Self::Output, ActionError> {
        let floor = transition::descend(ctx, self.actor)?;
        ctx.emit("You descend the staircase.", ColorHint::Descend);
        Ok(floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;
    use crate::testing::{self, Fixture};

    fn in_party(fx: &Fixture, id: EntityId) -> bool {
        fx.actor(id).in_party()
    }

    #[test]
    fn converse_toggles_party_membership() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let npc = fx.spawn(&testing::npc(), Position::new(3, 3));

        fx.run(ConverseAction::new(EntityId::PLAYER, 1, 1)).unwrap();
        assert!(in_party(&fx, npc));

        fx.run(ConverseAction::new(EntityId::PLAYER, 1, 1)).unwrap();
        assert!(!in_party(&fx, npc));
        assert_eq!(
            fx.texts(),
            vec!["NPC joined in the group.", "NPC leaved your group."]
        );
    }

    #[test]
    fn converse_rejects_distant_targets() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let npc = fx.spawn(&testing::npc(), Position::new(4, 2));
        let error = fx
            .run(ConverseAction::new(EntityId::PLAYER, 2, 0))
            .unwrap_err();
        assert_eq!(
            error,
            ActionError::impossible("That NPC is too far away to talk to.")
        );
        assert!(!in_party(&fx, npc));
    }

    #[test]
    fn converse_rejects_hostiles_and_empty_cells() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        fx.spawn(&testing::goblin(), Position::new(3, 2));
        let expected = ActionError::impossible("You can only talk to friendly NPCs nearby.");

        assert_eq!(
            fx.run(ConverseAction::new(EntityId::PLAYER, 1, 0))
                .unwrap_err(),
            expected
        );
        assert_eq!(
            fx.run(ConverseAction::new(EntityId::PLAYER, 0, 1))
                .unwrap_err(),
            expected
        );
    }

    #[test]
    fn stairs_require_a_staircase() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        let error = fx.run(TakeStairsAction::new(EntityId::PLAYER)).unwrap_err();
        assert_eq!(error, ActionError::impossible("There are no stairs here."));
        assert_eq!(fx.state.world.current_floor, FloorId(0));
    }

    #[test]
    fn stairs_descend_one_floor() {
        let mut fx = Fixture::new(10, 10).with_player(Position::new(2, 2));
        fx.state
            .world
            .map
            .set_terrain(Position::new(2, 2), TerrainKind::DownStairs);

        fx.run(TakeStairsAction::new(EntityId::PLAYER)).unwrap();

        assert_eq!(fx.state.world.current_floor, FloorId(1));
        assert_eq!(
            fx.actor(EntityId::PLAYER).position,
            testing::FLOOR_ENTRY
        );
        assert_eq!(fx.texts(), vec!["You descend the staircase."]);
    }
}
