pub mod components;
pub mod config;
pub mod constants;
pub mod map;
pub mod resources;
pub mod systems;

use bevy::{prelude::*, time::TimeUpdateStrategy};
use std::time::Duration;
use tracing::info;

use common::systems::movement_system;
use config::ArenaSettings;
use map::generate_arena;
use resources::{CopSpawner, GameState, PickupSpawners, SimRng, game_running};
use systems::{bombs::*, cops::*, pickups::*, player::*, score::*, spawn::*};

// ============================================================================
// App Assembly
// ============================================================================

/// Headless arena app stepping a fixed `1 / hz` seconds per `update()`.
///
/// The player spawns on the first update. Gameplay systems run in one fixed
/// order and stop once the run is won or lost.
#[must_use]
pub fn build_app(settings: &ArenaSettings) -> App {
    let mut app = App::new();

    let (obstacles, spawn_points) = generate_arena();
    info!(
        "generated {} obstacles, {} spawn points",
        obstacles.obstacles.len(),
        spawn_points.0.len()
    );

    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            settings.tick_seconds(),
        )))
        .insert_resource(settings.clone())
        .insert_resource(obstacles)
        .insert_resource(spawn_points)
        .insert_resource(SimRng::new(settings.seed))
        .insert_resource(CopSpawner::new(settings.max_cops))
        .insert_resource(PickupSpawners::new(settings.bombs_enabled))
        .insert_resource(GameState::new(settings.bombs_enabled))
        .add_systems(Startup, player_spawn_system)
        .add_systems(
            Update,
            (
                // Order matters:
                // 1. Spawning and player decisions see last tick's world
                // 2. Bombs explode before the chase so a stun wins this tick
                // 3. Movement integrates every velocity written above
                // 4. Contacts and the outcome are judged on the new positions
                cop_spawn_system,
                pickup_spawn_system,
                player_autopilot_system,
                bomb_fuse_system,
                cop_chase_system,
                movement_system,
                pickup_collection_system,
                cop_catch_system,
                score_tick_system,
                outcome_system,
            )
                .chain()
                .run_if(game_running),
        );

    app.finish();
    app.cleanup();
    app
}
