use std::cmp::Reverse;
use std::collections::BinaryHeap;

use arrayvec::ArrayVec;

use super::CostGrid;
use crate::state::{Direction, Position};

/// Base cost multipliers for cardinal and diagonal steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCosts {
    pub cardinal: u32,
    pub diagonal: u32,
}

impl StepCosts {
    pub const fn new(cardinal: u32, diagonal: u32) -> Self {
        Self { cardinal, diagonal }
    }

    fn for_direction(&self, direction: Direction) -> u32 {
        if direction.is_diagonal() {
            self.diagonal
        } else {
            self.cardinal
        }
    }
}

fn neighbors(origin: Position) -> ArrayVec<(Position, Direction), 8> {
    Direction::ALL
        .iter()
        .map(|&direction| {
            let (dx, dy) = direction.delta();
            (origin.offset(dx, dy), direction)
        })
        .collect()
}

/// Cheapest route from `origin` to `destination`.
///
/// Entering a cell costs its grid cost times the step multiplier. The returned
/// path excludes `origin` and ends at `destination`; it is empty when the
/// destination is unreachable or equal to the origin.
pub fn find_path(
    grid: &CostGrid,
    origin: Position,
    destination: Position,
    steps: StepCosts,
) -> Vec<Position> {
    let dimensions = grid.dimensions();
    let (Some(start), Some(goal)) = (dimensions.index(origin), dimensions.index(destination))
    else {
        return Vec::new();
    };
    if start == goal || grid.cost_at(goal) == 0 {
        return Vec::new();
    }

    let mut dist = vec![u32::MAX; dimensions.area()];
    let mut previous: Vec<Option<usize>> = vec![None; dimensions.area()];
    dist[start] = 0;

    let mut heap: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();
    heap.push(Reverse((0, start)));

    while let Some(Reverse((cost, index))) = heap.pop() {
        if cost != dist[index] {
            continue;
        }
        if index == goal {
            break;
        }

        for (neighbor, direction) in neighbors(dimensions.position(index)) {
            let Some(next) = dimensions.index(neighbor) else {
                continue;
            };
            let cell_cost = grid.cost_at(next);
            if cell_cost == 0 {
                continue;
            }
            let new_cost = cost.saturating_add(cell_cost * steps.for_direction(direction));
            if new_cost < dist[next] {
                dist[next] = new_cost;
                previous[next] = Some(index);
                heap.push(Reverse((new_cost, next)));
            }
        }
    }

    if dist[goal] == u32::MAX {
        return Vec::new();
    }

    let mut path = Vec::new();
    let mut cursor = goal;
    while cursor != start {
        path.push(dimensions.position(cursor));
        match previous[cursor] {
            Some(prev) => cursor = prev,
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Total cost of walking `path` from `origin`, or `None` if a step is not a
/// single king move onto a passable cell.
pub fn path_cost(
    grid: &CostGrid,
    origin: Position,
    path: &[Position],
    steps: StepCosts,
) -> Option<u32> {
    let mut total = 0u32;
    let mut current = origin;
    for &next in path {
        if current.chebyshev(next) != 1 {
            return None;
        }
        let cell_cost = grid.cost(next);
        if cell_cost == 0 {
            return None;
        }
        let (dx, dy) = current.delta_to(next);
        let multiplier = if dx != 0 && dy != 0 {
            steps.diagonal
        } else {
            steps.cardinal
        };
        total += cell_cost * multiplier;
        current = next;
    }
    Some(total)
}
