//! Grid shortest paths for AI movement.
//!
//! Callers build a [`CostGrid`] every time they plan, since blocking actors
//! move between turns, then run [`find_path`] over it.

mod dijkstra;
mod grid;

pub use dijkstra::{StepCosts, find_path, path_cost};
pub use grid::{CostGrid, CrowdPolicy};

use crate::config::GameConfig;
use crate::state::{EntityId, GameState, Position};

/// Plans a route for `requester` to `destination` on the current floor.
pub fn plan_route(
    state: &GameState,
    config: &GameConfig,
    requester: EntityId,
    destination: Position,
    policy: CrowdPolicy,
) -> Vec<Position> {
    let Some(origin) = state.entities.actor(requester).map(|actor| actor.position) else {
        return Vec::new();
    };
    let grid = CostGrid::for_requester(state, config, requester, policy);
    let path = find_path(
        &grid,
        origin,
        destination,
        StepCosts::new(config.cardinal_step_cost, config.diagonal_step_cost),
    );
    tracing::debug!(
        "path for {} from {} to {}: {} steps",
        requester,
        origin,
        destination,
        path.len()
    );
    path
}
