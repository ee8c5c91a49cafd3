use crate::config::GameConfig;
use crate::state::{EntityId, GameState, MapDimensions, Position, TileGrid};

/// How occupied cells are penalised when building a cost grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CrowdPolicy {
    /// Only cells that are already walkable get the penalty, so walls stay
    /// impassable.
    SkipUnwalkable,
    /// Every occupied cell gets the penalty, which makes an occupied wall
    /// enterable at the penalty cost.
    Unconditional,
}

/// Per-cell cost of entering a cell. Zero means impassable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostGrid {
    dimensions: MapDimensions,
    costs: Vec<u32>,
}

impl CostGrid {
    /// Walkable cells cost 1, everything else 0.
    pub fn from_walkability(map: &TileGrid) -> Self {
        let costs = map
            .cells()
            .map(|(_, terrain)| u32::from(terrain.is_walkable()))
            .collect();
        Self {
            dimensions: map.dimensions(),
            costs,
        }
    }

    /// Cost grid for `requester`: terrain walkability plus a crowd penalty on
    /// every cell held by another movement-blocking actor.
    pub fn for_requester(
        state: &GameState,
        config: &GameConfig,
        requester: EntityId,
        policy: CrowdPolicy,
    ) -> Self {
        let mut grid = Self::from_walkability(&state.world.map);
        for actor in &state.entities.actors {
            if actor.id == requester || !actor.blocks_movement {
                continue;
            }
            grid.add_penalty(actor.position, config.crowd_penalty, policy);
        }
        grid
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    /// Out-of-bounds cells cost 0.
    pub fn cost(&self, position: Position) -> u32 {
        self.dimensions
            .index(position)
            .map_or(0, |index| self.costs[index])
    }

    pub(crate) fn cost_at(&self, index: usize) -> u32 {
        self.costs[index]
    }

    pub fn set_cost(&mut self, position: Position, cost: u32) {
        if let Some(index) = self.dimensions.index(position) {
            self.costs[index] = cost;
        }
    }

    pub fn add_penalty(&mut self, position: Position, penalty: u32, policy: CrowdPolicy) {
        let Some(index) = self.dimensions.index(position) else {
            return;
        };
        let cost = &mut self.costs[index];
        match policy {
            CrowdPolicy::SkipUnwalkable if *cost == 0 => {}
            _ => *cost += penalty,
        }
    }
}
