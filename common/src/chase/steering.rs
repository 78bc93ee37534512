use bevy_math::Vec2;

use super::config::ChaseConfig;
use crate::{
    constants::{PHYSICS_EPSILON, STALL_SPEED},
    environment::LineOfSight,
};

// ============================================================================
// Separation
// ============================================================================

// Average of unit vectors pointing away from each neighbor, each weighted by
// 1/distance. Neighbors sitting exactly on top of the agent give no direction
// and are skipped.
#[must_use]
pub fn separation_push(origin: Vec2, neighbors: &[Vec2]) -> Vec2 {
    let mut push = Vec2::ZERO;
    let mut count = 0_u32;

    for neighbor in neighbors {
        let away = origin - *neighbor;
        let distance = away.length();
        if distance < PHYSICS_EPSILON {
            continue;
        }
        push += away / (distance * distance);
        count += 1;
    }

    if count == 0 { Vec2::ZERO } else { push / count as f32 }
}

// Blend the push into the desired velocity and restore the personal speed
#[must_use]
pub fn blend_separation(desired: Vec2, push: Vec2, strength: f32, speed: f32) -> Vec2 {
    if push == Vec2::ZERO {
        return desired;
    }
    (desired + push * strength).normalize_or_zero() * speed
}

// ============================================================================
// Obstacle Avoidance
// ============================================================================

// Which way the side probes sent the agent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

// Probe ahead along the velocity; on a hit drop the component along the wall
// normal. When nothing is left, side probes pick the open flank.
#[must_use]
pub fn avoid_obstacles(
    los: &dyn LineOfSight,
    position: Vec2,
    velocity: Vec2,
    to_target: Vec2,
    speed: f32,
    config: &ChaseConfig,
) -> Vec2 {
    let heading = velocity.normalize_or_zero();
    if heading == Vec2::ZERO {
        return velocity;
    }

    let Some(hit) = los.raycast(position, heading, config.probe_distance) else {
        return velocity;
    };

    let slid = velocity - hit.normal * velocity.dot(hit.normal);
    if slid.length() >= STALL_SPEED {
        return slid;
    }

    let Some(side) = pick_side(los, position, to_target, config) else {
        return slid;
    };
    let left = to_target.perp();
    match side {
        Side::Left => left * speed,
        Side::Right => -left * speed,
    }
}

// Cast the two flank probes along the direction to the target. Left wins
// unless only the left probe is blocked.
#[must_use]
pub fn pick_side(los: &dyn LineOfSight, position: Vec2, to_target: Vec2, config: &ChaseConfig) -> Option<Side> {
    if to_target == Vec2::ZERO {
        return None;
    }

    let left = to_target.perp();
    let probe = |side_dir: Vec2| {
        let origin = position + side_dir * config.side_probe_offset;
        los.raycast(origin, to_target, config.probe_distance).is_some()
    };

    let left_blocked = probe(left);
    let right_blocked = probe(-left);

    if left_blocked && !right_blocked {
        Some(Side::Right)
    } else {
        Some(Side::Left)
    }
}

// ============================================================================
// Stall Recovery
// ============================================================================

// Push sideways when the blend cancelled out a movement the agent wanted
#[must_use]
pub fn unstick(velocity: Vec2, heading: Vec2, nudge: f32) -> Vec2 {
    if heading == Vec2::ZERO || velocity.length() >= STALL_SPEED {
        return velocity;
    }
    velocity + heading.perp() * nudge
}
