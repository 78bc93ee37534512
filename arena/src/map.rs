use bevy::prelude::*;
use common::obstacles::{Obstacle, ObstacleField};

use crate::{constants::*, resources::SpawnPoints};

// ============================================================================
// City Layout
// ============================================================================

// Deterministic layout: a walled rectangle with a grid of square blocks.
// Spawn points sit on the street intersections between the blocks.
#[must_use]
pub fn generate_arena() -> (ObstacleField, SpawnPoints) {
    let mut obstacles = border_walls();
    obstacles.extend(city_blocks());
    (ObstacleField::new(obstacles), SpawnPoints(intersections()))
}

// Center of the block at (column, row), grid centered on the origin
#[must_use]
pub fn block_center(column: i32, row: i32) -> Vec2 {
    let x = (column as f32 - (BLOCK_COLUMNS - 1) as f32 * 0.5) * BLOCK_SPACING;
    let y = (row as f32 - (BLOCK_ROWS - 1) as f32 * 0.5) * BLOCK_SPACING;
    Vec2::new(x, y)
}

// --- private helpers ---

fn border_walls() -> Vec<Obstacle> {
    let (w, h, t) = (ARENA_HALF_WIDTH, ARENA_HALF_HEIGHT, BORDER_THICKNESS);
    vec![
        Obstacle::from_corners(Vec2::new(-w - t, h), Vec2::new(w + t, h + t)),
        Obstacle::from_corners(Vec2::new(-w - t, -h - t), Vec2::new(w + t, -h)),
        Obstacle::from_corners(Vec2::new(-w - t, -h), Vec2::new(-w, h)),
        Obstacle::from_corners(Vec2::new(w, -h), Vec2::new(w + t, h)),
    ]
}

fn city_blocks() -> Vec<Obstacle> {
    let half = Vec2::splat(BLOCK_HALF_SIZE);
    (0..BLOCK_ROWS)
        .flat_map(|row| (0..BLOCK_COLUMNS).map(move |column| Obstacle::from_center(block_center(column, row), half)))
        .collect()
}

// Corners shared by blocks, plus the outer ring of streets
fn intersections() -> Vec<Vec2> {
    let offset = Vec2::splat(BLOCK_SPACING * 0.5);
    let mut points = Vec::new();
    for row in 0..=BLOCK_ROWS {
        for column in 0..=BLOCK_COLUMNS {
            let point = block_center(column, row) - offset;
            if point.x.abs() < ARENA_HALF_WIDTH && point.y.abs() < ARENA_HALF_HEIGHT {
                points.push(point);
            }
        }
    }
    points
}
