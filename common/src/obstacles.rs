#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec2;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{
    collision::helpers::{circle_overlaps_box, ray_vs_box, segment_hits_box},
    environment::{LineOfSight, RayHit},
};

// ============================================================================
// Obstacles
// ============================================================================

// Axis-aligned solid rectangle (building, wall, fence)
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Obstacle {
    pub min: Vec2,
    pub max: Vec2,
}

impl Obstacle {
    // Build from any two opposite corners
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self::from_corners(center - half_extents, center + half_extents)
    }

    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

// The solid obstacle set; generated once at startup
#[derive(Resource, Debug, Clone, Default)]
pub struct ObstacleField {
    pub obstacles: Vec<Obstacle>,
}

impl ObstacleField {
    #[must_use]
    pub const fn new(obstacles: Vec<Obstacle>) -> Self {
        Self { obstacles }
    }

    // Does a circle of `radius` at `center` touch any obstacle
    #[must_use]
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        self.obstacles
            .iter()
            .any(|o| circle_overlaps_box(center, radius, o.min, o.max))
    }
}

impl LineOfSight for ObstacleField {
    fn is_blocked(&self, from: Vec2, to: Vec2) -> bool {
        self.obstacles.iter().any(|o| segment_hits_box(from, to, o.min, o.max))
    }

    fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Option<RayHit> {
        let dir = direction.normalize_or_zero();
        if dir == Vec2::ZERO || max_distance <= 0.0 {
            return None;
        }
        let ray = dir * max_distance;

        self.obstacles
            .iter()
            .filter_map(|o| ray_vs_box(origin, ray, o.min, o.max))
            .min_by(|a, b| a.t.total_cmp(&b.t))
            .map(|hit| {
                let distance = hit.t * max_distance;
                RayHit {
                    point: origin + dir * distance,
                    normal: hit.normal,
                    distance,
                }
            })
    }
}
