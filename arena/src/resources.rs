use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::constants::*;

// ============================================================================
// Bevy Resources
// ============================================================================

// Single seeded random source; every draw in a run goes through it
#[derive(Resource)]
pub struct SimRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl SimRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

// Street intersections where cops and pickups may appear
#[derive(Resource, Debug, Clone, Default)]
pub struct SpawnPoints(pub Vec<Vec2>);

// Cop spawn clock with difficulty ramp
#[derive(Resource, Debug, Clone)]
pub struct CopSpawner {
    pub max_cops: u32,
    pub interval: f32,
    pub spawn_timer: f32,
    pub ramp_timer: f32,
    pub next_id: u32,
}

impl CopSpawner {
    #[must_use]
    pub const fn new(max_cops: u32) -> Self {
        Self {
            max_cops,
            interval: COP_SPAWN_INTERVAL,
            spawn_timer: 0.0,
            ramp_timer: 0.0,
            next_id: 0,
        }
    }

    // Shorter interval and one more cop allowed, within the caps
    pub fn ramp(&mut self) {
        self.interval = (self.interval - COP_SPAWN_INTERVAL_STEP).max(COP_SPAWN_INTERVAL_MIN);
        if self.max_cops < COP_MAX_CAP {
            self.max_cops += 1;
        }
    }
}

// Spawn clock for one kind of pickup
#[derive(Debug, Clone)]
pub struct PickupSpawner {
    pub interval: f32,
    pub max_alive: usize,
    pub min_player_distance: f32,
    pub timer: f32,
    pub enabled: bool,
}

impl PickupSpawner {
    #[must_use]
    pub const fn new(interval: f32, max_alive: usize, min_player_distance: f32, enabled: bool) -> Self {
        Self {
            interval,
            max_alive,
            min_player_distance,
            timer: 0.0,
            enabled,
        }
    }

    // Advance the clock; true once per elapsed interval
    pub fn due(&mut self, delta: f32) -> bool {
        if !self.enabled {
            return false;
        }
        self.timer += delta;
        if self.timer >= self.interval {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct PickupSpawners {
    pub coins: PickupSpawner,
    pub bombs: PickupSpawner,
}

impl PickupSpawners {
    #[must_use]
    pub const fn new(bombs_enabled: bool) -> Self {
        Self {
            coins: PickupSpawner::new(COIN_SPAWN_INTERVAL, COIN_MAX, COIN_MIN_PLAYER_DISTANCE, true),
            bombs: PickupSpawner::new(
                BOMB_PICKUP_SPAWN_INTERVAL,
                BOMB_PICKUP_MAX,
                BOMB_PICKUP_MIN_PLAYER_DISTANCE,
                bombs_enabled,
            ),
        }
    }
}

// How the run ended, if it has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    Running,
    Victory,
    GameOver,
}

// Score, lives and inventory of the single player
#[derive(Resource, Debug, Clone)]
pub struct GameState {
    pub score: f32,
    pub lives: u32,
    pub bombs: u32,
    pub invulnerable_timer: f32,
    pub bomb_cooldown: f32,
    pub outcome: Outcome,
}

impl GameState {
    #[must_use]
    pub const fn new(bombs_enabled: bool) -> Self {
        Self {
            score: 0.0,
            lives: PLAYER_LIVES,
            bombs: if bombs_enabled { PLAYER_START_BOMBS } else { 0 },
            invulnerable_timer: 0.0,
            bomb_cooldown: 0.0,
            outcome: Outcome::Running,
        }
    }

    // Points only count while the run is live
    pub fn add_score(&mut self, points: f32) {
        if self.outcome == Outcome::Running {
            self.score += points;
        }
    }
}

// Run condition for every gameplay system
#[must_use]
pub fn game_running(state: Res<GameState>) -> bool {
    state.outcome == Outcome::Running
}
