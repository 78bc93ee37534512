#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use bevy_time::Time;

use crate::{
    collision::slide_body_along_obstacles,
    components::{Collider, Position, Velocity},
    obstacles::ObstacleField,
};

// ============================================================================
// Shared Game Systems
// ============================================================================

// Movement system - integrates velocity into position.
// Bodies with a collider slide along obstacles; everything else moves freely.
pub fn movement_system(
    time: Res<Time>,
    obstacles: Res<ObstacleField>,
    mut query: Query<(&mut Position, &Velocity, Option<&Collider>)>,
) {
    let delta = time.delta_secs();
    if delta <= 0.0 {
        return;
    }

    for (mut pos, vel, collider) in &mut query {
        if vel.0 == Vec2::ZERO {
            continue;
        }

        pos.0 = match collider {
            Some(collider) => slide_body_along_obstacles(&obstacles, pos.0, vel.0, collider.radius, delta),
            None => pos.0 + vel.0 * delta,
        };
    }
}
