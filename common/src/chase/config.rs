use anyhow::{Result, ensure};
use bevy_math::Vec2;
use rand::Rng;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::constants::*;

// ============================================================================
// Chase Configuration
// ============================================================================

/// Tuning shared by every cop. Fixed once the agent is created.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
pub struct ChaseConfig {
    /// Base speed before per-agent jitter (m/s).
    pub move_speed: f32,
    /// Maximum distance at which the target can be seen (m).
    pub vision_range: f32,
    /// How long the agent keeps chasing after losing sight (s).
    pub lose_sight_time: f32,
    /// Length of the forward obstacle probe (m).
    pub probe_distance: f32,
    /// Sideways offset of the two fallback probes (m).
    pub side_probe_offset: f32,
    /// Speed of the perpendicular push that breaks a stall (m/s).
    pub unstick_nudge: f32,
    /// Neighbors closer than this push the agent away (m).
    pub separation_radius: f32,
    /// Weight of the separation push relative to the chase heading.
    pub separation_strength: f32,
    /// Per-axis bound of the personal aim offset around the target (m).
    pub target_offset_range: f32,
    /// Bound of the personal speed jitter either side of `move_speed` (m/s).
    pub speed_variation: f32,
    /// Speed of the dance while stunned (m/s).
    pub boogie_amplitude: f32,
    /// Angular frequency of the dance (rad/s).
    pub boogie_frequency: f32,
}

impl Default for ChaseConfig {
    fn default() -> Self {
        Self {
            move_speed: COP_MOVE_SPEED,
            vision_range: COP_VISION_RANGE,
            lose_sight_time: COP_LOSE_SIGHT_TIME,
            probe_distance: COP_PROBE_DISTANCE,
            side_probe_offset: COP_SIDE_PROBE_OFFSET,
            unstick_nudge: COP_UNSTICK_NUDGE,
            separation_radius: COP_SEPARATION_RADIUS,
            separation_strength: COP_SEPARATION_STRENGTH,
            target_offset_range: COP_TARGET_OFFSET_RANGE,
            speed_variation: COP_SPEED_VARIATION,
            boogie_amplitude: BOOGIE_AMPLITUDE,
            boogie_frequency: BOOGIE_FREQUENCY,
        }
    }
}

impl ChaseConfig {
    // Reject tunings the steering math cannot work with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.move_speed > 0.0, "move_speed must be positive, got {}", self.move_speed);
        ensure!(self.vision_range >= 0.0, "vision_range must not be negative");
        ensure!(self.lose_sight_time >= 0.0, "lose_sight_time must not be negative");
        ensure!(self.probe_distance >= 0.0, "probe_distance must not be negative");
        ensure!(self.side_probe_offset >= 0.0, "side_probe_offset must not be negative");
        ensure!(self.unstick_nudge >= 0.0, "unstick_nudge must not be negative");
        ensure!(self.separation_radius >= 0.0, "separation_radius must not be negative");
        ensure!(self.target_offset_range >= 0.0, "target_offset_range must not be negative");
        ensure!(
            (0.0..self.move_speed).contains(&self.speed_variation),
            "speed_variation must be in [0, move_speed), got {}",
            self.speed_variation
        );
        ensure!(self.boogie_amplitude >= 0.0, "boogie_amplitude must not be negative");
        Ok(())
    }
}

// ============================================================================
// Personality
// ============================================================================

// Per-agent randomized traits, rolled once at spawn and never changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Personality {
    pub speed: f32,
    pub target_offset: Vec2,
}

impl Personality {
    // Roll speed jitter and aim offset from the supplied (seeded) random source
    pub fn roll<R: Rng + ?Sized>(config: &ChaseConfig, rng: &mut R) -> Self {
        let jitter = config.speed_variation;
        let range = config.target_offset_range;

        let speed = (config.move_speed + rng.random_range(-jitter..=jitter)).max(COP_MIN_SPEED);
        let target_offset = Vec2::new(rng.random_range(-range..=range), rng.random_range(-range..=range));

        Self { speed, target_offset }
    }

    // No jitter at all: base speed, aim straight at the target
    #[must_use]
    pub const fn plain(config: &ChaseConfig) -> Self {
        Self {
            speed: config.move_speed,
            target_offset: Vec2::ZERO,
        }
    }
}
