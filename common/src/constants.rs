// ============================================================================
// Floating-Point Comparisons
// ============================================================================

// Small value for floating-point comparisons (near-zero checks, division guards).
pub const PHYSICS_EPSILON: f32 = 1e-6;

// Below this speed a steering result counts as a stall (meters per second).
pub const STALL_SPEED: f32 = 0.05;

// ============================================================================
// Cops
// ============================================================================

// Chase tuning
pub const COP_MOVE_SPEED: f32 = 3.5; // meters per second
pub const COP_VISION_RANGE: f32 = 12.0; // meters
pub const COP_LOSE_SIGHT_TIME: f32 = 1.25; // seconds

// Obstacle probes (meters)
pub const COP_PROBE_DISTANCE: f32 = 0.6;
pub const COP_SIDE_PROBE_OFFSET: f32 = 0.5;
pub const COP_UNSTICK_NUDGE: f32 = 0.4; // meters per second

// Crowd separation
pub const COP_SEPARATION_RADIUS: f32 = 1.5; // meters
pub const COP_SEPARATION_STRENGTH: f32 = 1.0;

// Per-cop personality jitter, rolled once at spawn
pub const COP_TARGET_OFFSET_RANGE: f32 = 0.75; // meters, per axis
pub const COP_SPEED_VARIATION: f32 = 0.4; // meters per second, either side of base
pub const COP_MIN_SPEED: f32 = 0.5; // floor after jitter

// Boogie dance while stunned
pub const BOOGIE_AMPLITUDE: f32 = 0.8; // meters per second
pub const BOOGIE_FREQUENCY: f32 = 8.0; // radians per second

// Dimensions (meters)
pub const COP_RADIUS: f32 = 0.35;

// ============================================================================
// Player
// ============================================================================

pub const PLAYER_SPEED: f32 = 6.0; // meters per second
pub const PLAYER_RADIUS: f32 = 0.3; // meters

// ============================================================================
// Pickups
// ============================================================================

pub const PICKUP_RADIUS: f32 = 0.3; // meters

// ============================================================================
// Boogie Bombs
// ============================================================================

pub const BOMB_FUSE_TIME: f32 = 0.8; // seconds before explosion
pub const BOMB_EXPLOSION_RADIUS: f32 = 3.5; // meters
pub const BOMB_BOOGIE_DURATION: f32 = 3.5; // seconds cops dance
