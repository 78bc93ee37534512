// ============================================================================
// Simulation Loop
// ============================================================================

pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_TICK_HZ: u32 = 30;
pub const DEFAULT_TICKS: u64 = 30 * 120; // two minutes at the default rate

// Virtual time clamps larger steps, so slower rates would drop simulated time
pub const MIN_TICK_HZ: u32 = 4;
pub const MAX_TICK_HZ: u32 = 1000;

pub const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// Map Layout
// ============================================================================

// Playable area is [-HALF_WIDTH, HALF_WIDTH] x [-HALF_HEIGHT, HALF_HEIGHT] (meters)
pub const ARENA_HALF_WIDTH: f32 = 15.0;
pub const ARENA_HALF_HEIGHT: f32 = 11.0;
pub const BORDER_THICKNESS: f32 = 0.5;

// City blocks sit on a regular grid with streets between them
pub const BLOCK_SPACING: f32 = 6.0;
pub const BLOCK_HALF_SIZE: f32 = 1.5;
pub const BLOCK_COLUMNS: i32 = 4;
pub const BLOCK_ROWS: i32 = 3;

// ============================================================================
// Cop Spawner
// ============================================================================

pub const COP_MAX_START: u32 = 5;
pub const COP_MAX_CAP: u32 = 10;
pub const COP_SPAWN_INTERVAL: f32 = 4.0; // seconds
pub const COP_SPAWN_INTERVAL_STEP: f32 = 0.5; // seconds shaved off per ramp
pub const COP_SPAWN_INTERVAL_MIN: f32 = 1.5; // seconds
pub const COP_RAMP_EVERY: f32 = 15.0; // seconds
pub const COP_SPAWN_MIN_PLAYER_DISTANCE: f32 = 5.0; // meters
pub const COP_SPAWN_CLEARANCE: f32 = 0.35; // meters, must not overlap an obstacle

// Random spawn point draws per spawn cycle before giving up until the next one
pub const SPAWN_ATTEMPTS: u32 = 16;

// Above this many cops the neighbor lookup switches from a flat list to a grid
pub const SPATIAL_GRID_THRESHOLD: usize = 32;

// ============================================================================
// Pickups
// ============================================================================

pub const COIN_SPAWN_INTERVAL: f32 = 5.0; // seconds
pub const COIN_MAX: usize = 5;
pub const COIN_POINTS: u32 = 10;
pub const COIN_MIN_PLAYER_DISTANCE: f32 = 3.0; // meters

pub const BOMB_PICKUP_SPAWN_INTERVAL: f32 = 15.0; // seconds
pub const BOMB_PICKUP_MAX: usize = 2;
pub const BOMB_PICKUP_AMOUNT: u32 = 1;
pub const BOMB_PICKUP_MIN_PLAYER_DISTANCE: f32 = 3.0; // meters

// ============================================================================
// Player
// ============================================================================

pub const PLAYER_LIVES: u32 = 3;
pub const PLAYER_START_BOMBS: u32 = 1;
pub const PLAYER_INVULNERABLE_TIME: f32 = 1.5; // seconds after being caught

// Autopilot
pub const PLAYER_DANGER_RANGE: f32 = 4.0; // meters, flee cops closer than this
pub const PLAYER_BOMB_THROW_RANGE: f32 = 2.5; // meters
pub const PLAYER_BOMB_COOLDOWN: f32 = 1.0; // seconds between throws
pub const PLAYER_AXIS_DEADZONE: f32 = 0.25; // per-axis share of the wanted direction

// ============================================================================
// Bombs
// ============================================================================

pub const BOMB_RADIUS: f32 = 0.1; // meters

// ============================================================================
// Score
// ============================================================================

pub const SCORE_PER_SECOND: f32 = 1.0;
pub const WIN_SCORE: f32 = 500.0;
