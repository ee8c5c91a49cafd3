//! Abstraction for sourcing player intent.
//!
//! Runtime users plug in [`ActionProvider`] implementations so the simulation
//! can run with human input, scripted fixtures, or an automatic wanderer.
//! Non-player actors never go through a provider; their behaviors decide.

use std::collections::VecDeque;

use barbarian_core::{Action, Direction, EntityId, GameState, TakeStairsAction, TerrainKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::errors::{Result, RuntimeError};

/// Trait for providing actions based on the current game state.
pub trait ActionProvider: Send {
    /// Provide an action for the given entity based on a read-only view of
    /// the current game state.
    fn provide_action(&mut self, entity: EntityId, state: &GameState) -> Result<Action>;
}

/// A simple action provider that always returns Wait action.
/// Useful for testing or as a fallback.
pub struct WaitActionProvider;

impl ActionProvider for WaitActionProvider {
    fn provide_action(&mut self, entity: EntityId, _state: &GameState) -> Result<Action> {
        Ok(Action::wait(entity))
    }
}

/// Replays a fixed list of actions, then waits forever.
///
/// Queued actions are re-targeted at the entity asking, so scripts can be
/// written against [`EntityId::PLAYER`].
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    queue: VecDeque<Action>,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }

    pub fn push(&mut self, action: Action) {
        self.queue.push_back(action);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn provide_action(&mut self, entity: EntityId, _state: &GameState) -> Result<Action> {
        match self.queue.pop_front() {
            Some(action) if action.actor() == entity => Ok(action),
            Some(action) => Err(RuntimeError::Provider(format!(
                "scripted action for {} offered to {}",
                action.actor(),
                entity
            ))),
            None => Ok(Action::wait(entity)),
        }
    }
}

/// Bumps in random directions and takes any stairs it stands on.
pub struct WanderProvider {
    rng: StdRng,
}

impl WanderProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ActionProvider for WanderProvider {
    fn provide_action(&mut self, entity: EntityId, state: &GameState) -> Result<Action> {
        let position = state
            .entities
            .actor(entity)
            .map(|actor| actor.position)
            .ok_or(RuntimeError::NoPlayer)?;
        if state.world.map.terrain(position) == Some(TerrainKind::DownStairs) {
            return Ok(TakeStairsAction::new(entity).into());
        }
        let direction = Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())];
        Ok(Action::bump(entity, direction))
    }
}

#[cfg(test)]
mod tests {
    use barbarian_core::{FloorId, MapDimensions, Position, TileGrid, WorldState};

    use super::*;

    fn state_with_player(at: Position) -> GameState {
        let mut state = GameState::new(WorldState::new(
            TileGrid::walled_room(MapDimensions::new(8, 8)),
            FloorId(1),
        ));
        state.add_player(&barbarian_content::actors::player(), at);
        state
    }

    #[test]
    fn script_runs_out_into_waiting() {
        let state = state_with_player(Position::new(2, 2));
        let mut provider = ScriptedProvider::new([Action::move_by(EntityId::PLAYER, 1, 0)]);

        assert_eq!(
            provider.provide_action(EntityId::PLAYER, &state).unwrap(),
            Action::move_by(EntityId::PLAYER, 1, 0)
        );
        assert_eq!(
            provider.provide_action(EntityId::PLAYER, &state).unwrap(),
            Action::wait(EntityId::PLAYER)
        );
    }

    #[test]
    fn script_rejects_foreign_actions() {
        let state = state_with_player(Position::new(2, 2));
        let mut provider = ScriptedProvider::new([Action::wait(EntityId(3))]);
        assert!(matches!(
            provider.provide_action(EntityId::PLAYER, &state),
            Err(RuntimeError::Provider(_))
        ));
    }

    #[test]
    fn wanderer_takes_stairs() {
        let mut state = state_with_player(Position::new(3, 3));
        state
            .world
            .map
            .set_terrain(Position::new(3, 3), TerrainKind::DownStairs);
        let mut provider = WanderProvider::new(1);

        assert_eq!(
            provider.provide_action(EntityId::PLAYER, &state).unwrap(),
            Action::from(TakeStairsAction::new(EntityId::PLAYER))
        );
    }

    #[test]
    fn wanderer_is_reproducible() {
        let state = state_with_player(Position::new(3, 3));
        let mut first = WanderProvider::new(42);
        let mut second = WanderProvider::new(42);
        for _ in 0..10 {
            assert_eq!(
                first.provide_action(EntityId::PLAYER, &state).unwrap(),
                second.provide_action(EntityId::PLAYER, &state).unwrap()
            );
        }
    }
}
