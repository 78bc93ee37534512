use bevy_math::Vec2;
use tracing::debug;

use super::{
    boogie::{BoogieState, BoogieTick, boogie_tint, boogie_velocity},
    config::{ChaseConfig, Personality},
    steering::{avoid_obstacles, blend_separation, separation_push, unstick},
    vision::VisionState,
};
use crate::{
    components::AgentId,
    environment::{AgentRegistry, LineOfSight, PositionProvider},
};

// ============================================================================
// Tick Inputs and Outputs
// ============================================================================

// Everything outside the agent that a tick may look at
pub struct Surroundings<'a> {
    pub target: &'a dyn PositionProvider,
    pub obstacles: Option<&'a dyn LineOfSight>,
    pub neighbors: &'a dyn AgentRegistry,
}

// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    pub velocity: Vec2,
    pub face_left: bool,
    // Present only while dancing
    pub tint: Option<f32>,
}

// Coarse behavior state, derived from vision and stun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChaseMode {
    #[default]
    Idle,
    Tracking,
    Stunned,
}

// ============================================================================
// Chase Agent
// ============================================================================

/// Chase brain of a single cop.
///
/// Each tick it decides a velocity from the target position, obstacle queries
/// and sibling positions. A boogie stun suspends all of that and makes the
/// agent dance until the stun runs out, after which sight must be reacquired.
#[derive(Debug, Clone)]
pub struct ChaseAgent {
    id: AgentId,
    config: ChaseConfig,
    personality: Personality,
    vision: VisionState,
    boogie: BoogieState,
    face_left: bool,
    mode: ChaseMode,
}

impl ChaseAgent {
    #[must_use]
    pub fn new(id: AgentId, config: ChaseConfig, personality: Personality) -> Self {
        Self {
            id,
            config,
            personality,
            vision: VisionState::default(),
            boogie: BoogieState::default(),
            face_left: false,
            mode: ChaseMode::Idle,
        }
    }

    #[must_use]
    pub const fn id(&self) -> AgentId {
        self.id
    }

    #[must_use]
    pub const fn config(&self) -> &ChaseConfig {
        &self.config
    }

    #[must_use]
    pub const fn personality(&self) -> Personality {
        self.personality
    }

    #[must_use]
    pub const fn vision(&self) -> VisionState {
        self.vision
    }

    #[must_use]
    pub const fn boogie(&self) -> BoogieState {
        self.boogie
    }

    #[must_use]
    pub const fn mode(&self) -> ChaseMode {
        self.mode
    }

    #[must_use]
    pub const fn is_stunned(&self) -> bool {
        self.boogie.active
    }

    // Stun the agent for `duration` seconds; re-triggering restarts the clock.
    // Sight is forgotten so the agent has to spot the target again afterwards.
    pub fn enter_boogie(&mut self, duration: f32) {
        if duration <= 0.0 {
            debug!(agent = self.id.0, duration, "ignoring non-positive boogie duration");
            return;
        }
        self.boogie.start(duration);
        self.vision.reset();
        self.set_mode(ChaseMode::Stunned);
    }

    // Advance one fixed step. `elapsed` is global time and drives the dance.
    pub fn tick(&mut self, position: Vec2, delta: f32, elapsed: f32, surroundings: &Surroundings<'_>) -> Steering {
        let Some(target) = surroundings.target.position() else {
            return self.idle();
        };

        match self.boogie.advance(delta) {
            BoogieTick::Dancing => {
                return Steering {
                    velocity: boogie_velocity(elapsed, self.config.boogie_amplitude, self.config.boogie_frequency),
                    face_left: self.face_left,
                    tint: Some(boogie_tint(elapsed, self.config.boogie_frequency)),
                };
            }
            BoogieTick::Expired => {
                // Stun over: start from "no sight" and re-evaluate right away
                self.vision.reset();
            }
            BoogieTick::Inactive => {}
        }

        let sees_target = self.sees(position, target, surroundings.obstacles);
        self.vision.observe(sees_target, delta, self.config.lose_sight_time);

        if !(self.vision.has_line_of_sight || sees_target) {
            return self.idle();
        }

        self.set_mode(ChaseMode::Tracking);
        let velocity = self.steer(position, target, surroundings);
        if velocity != Vec2::ZERO {
            self.face_left = velocity.x < 0.0;
        }

        Steering {
            velocity,
            face_left: self.face_left,
            tint: None,
        }
    }

    // --- private helpers ---

    fn sees(&self, position: Vec2, target: Vec2, obstacles: Option<&dyn LineOfSight>) -> bool {
        let in_range = position.distance(target) <= self.config.vision_range;
        in_range && !obstacles.is_some_and(|los| los.is_blocked(position, target))
    }

    fn steer(&self, position: Vec2, target: Vec2, surroundings: &Surroundings<'_>) -> Vec2 {
        let speed = self.personality.speed;
        let heading = (target + self.personality.target_offset - position).normalize_or_zero();
        let mut velocity = heading * speed;

        let neighbors = surroundings.neighbors.nearby(self.id, position, self.config.separation_radius);
        let push = separation_push(position, &neighbors);
        velocity = blend_separation(velocity, push, self.config.separation_strength, speed);

        if let Some(los) = surroundings.obstacles {
            let to_target = (target - position).normalize_or_zero();
            velocity = avoid_obstacles(los, position, velocity, to_target, speed, &self.config);
        }

        velocity = unstick(velocity, heading, self.config.unstick_nudge);
        velocity.clamp_length_max(speed)
    }

    fn idle(&mut self) -> Steering {
        let mode = if self.boogie.active { ChaseMode::Stunned } else { ChaseMode::Idle };
        self.set_mode(mode);
        Steering {
            velocity: Vec2::ZERO,
            face_left: self.face_left,
            tint: None,
        }
    }

    fn set_mode(&mut self, mode: ChaseMode) {
        if self.mode != mode {
            debug!(agent = self.id.0, from = ?self.mode, to = ?mode, "chase mode changed");
            self.mode = mode;
        }
    }
}
