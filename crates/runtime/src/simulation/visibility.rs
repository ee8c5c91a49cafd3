//! Field of view around the player.
//!
//! A cell is visible when it lies within the sight radius (Euclidean) and a
//! Bresenham line from the viewer reaches it without passing through an
//! opaque cell. The target cell itself may be opaque, so walls are seen.

use barbarian_core::{Position, TerrainKind, TileGrid};

/// Recomputes `visible` for the whole map; newly seen cells become known.
pub fn refresh(map: &mut TileGrid, origin: Position, radius: u32) {
    map.clear_visible();
    let reach = radius as i32;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            let target = origin.offset(dx, dy);
            if !map.in_bounds(target) || origin.euclidean(target) > radius as f32 {
                continue;
            }
            if line_of_sight(map, origin, target) {
                map.set_visible(target, true);
            }
        }
    }
}

fn line_of_sight(map: &TileGrid, from: Position, to: Position) -> bool {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut error = dx + dy;
    let mut current = from;

    loop {
        if current == to {
            return true;
        }
        if current != from
            && !map
                .terrain(current)
                .is_some_and(TerrainKind::is_transparent)
        {
            return false;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current.x += sx;
        }
        if doubled <= dx {
            error += dx;
            current.y += sy;
        }
    }
}
