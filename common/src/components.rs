#[allow(clippy::wildcard_imports)]
use bevy_ecs::prelude::*;
use bevy_math::Vec2;
use bevy_time::{Timer, TimerMode};

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::constants::*;

// ============================================================================
// Common Data Types
// ============================================================================

// World-space position in meters (x right, y up)
#[derive(Debug, Clone, Copy, Component, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Position(pub Vec2);

// Velocity in meters per second, written by whoever steers the entity
#[derive(Debug, Clone, Copy, Component, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct Velocity(pub Vec2);

// Sprite facing; true when the entity last moved toward negative x
#[derive(Debug, Clone, Copy, Component, Default, PartialEq, Eq)]
pub struct Facing {
    pub left: bool,
}

// Visual tint pulse in [0, 1]; None when the entity is drawn normally
#[derive(Debug, Clone, Copy, Component, Default, PartialEq)]
pub struct Tint(pub Option<f32>);

// Circular footprint used for wall sliding and overlap tests
#[derive(Debug, Clone, Copy, Component, PartialEq)]
pub struct Collider {
    pub radius: f32,
}

// Stable identity of a chase agent, used to exclude self from neighbor queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Component)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct AgentId(pub u32);

// ============================================================================
// Shared Game Components
// ============================================================================

// Component for a thrown boogie bomb
#[derive(Component)]
pub struct Bomb {
    pub fuse: Timer,
    pub radius: f32,
    pub boogie_duration: f32,
}

impl Bomb {
    // Create a new bomb with standard parameters
    #[must_use]
    pub fn new() -> Self {
        Self {
            fuse: Timer::from_seconds(BOMB_FUSE_TIME, TimerMode::Once),
            radius: BOMB_EXPLOSION_RADIUS,
            boogie_duration: BOMB_BOOGIE_DURATION,
        }
    }
}

impl Default for Bomb {
    fn default() -> Self {
        Self::new()
    }
}

// Collectible lying on the map
#[derive(Debug, Clone, Copy, Component, PartialEq, Eq)]
pub enum Pickup {
    Coin { points: u32 },
    BoogieBomb { amount: u32 },
}
