use bevy_math::Vec2;

use super::helpers::slide_along_axes;
use crate::obstacles::ObstacleField;

// Two circular bodies touch or overlap.
#[must_use]
pub fn overlap_bodies(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a_pos.distance_squared(b_pos) <= reach * reach
}

// Move a circular body by `velocity * delta`, sliding along whatever obstacle blocks it.
#[must_use]
pub fn slide_body_along_obstacles(
    obstacles: &ObstacleField,
    current_pos: Vec2,
    velocity: Vec2,
    radius: f32,
    delta: f32,
) -> Vec2 {
    // A body already wedged in a wall may move freely so it can get out
    if obstacles.overlaps_circle(current_pos, radius) {
        return current_pos + velocity * delta;
    }

    slide_along_axes(current_pos, velocity, delta, |candidate| {
        obstacles.overlaps_circle(candidate, radius)
    })
}
