use bevy::prelude::*;
use rand::Rng;
use tracing::{info, warn};

use crate::{
    components::Cop,
    config::ArenaSettings,
    constants::*,
    resources::{CopSpawner, SimRng, SpawnPoints},
};
use common::{
    chase::{ChaseAgent, Personality},
    components::{AgentId, Collider, Facing, Position, Tint, Velocity},
    constants::{COP_RADIUS, PLAYER_RADIUS},
    markers::{CopMarker, PlayerMarker},
    obstacles::ObstacleField,
};

// ============================================================================
// Spawn Helpers
// ============================================================================

// Everything a cop entity carries
pub fn cop_bundle(agent: ChaseAgent, position: Vec2) -> impl Bundle {
    (
        CopMarker,
        Cop(agent),
        Position(position),
        Velocity::default(),
        Facing::default(),
        Tint::default(),
        Collider { radius: COP_RADIUS },
    )
}

pub fn player_bundle(position: Vec2) -> impl Bundle {
    (
        PlayerMarker,
        Position(position),
        Velocity::default(),
        Facing::default(),
        Collider { radius: PLAYER_RADIUS },
    )
}

// Draw random spawn points until one is far enough from the player, clear of
// walls and not rejected by `occupied`. Gives up after SPAWN_ATTEMPTS draws.
pub fn find_spawn_point<R: Rng + ?Sized>(
    rng: &mut R,
    spawn_points: &SpawnPoints,
    obstacles: &ObstacleField,
    player_pos: Vec2,
    min_player_distance: f32,
    clearance: f32,
    occupied: impl Fn(Vec2) -> bool,
) -> Option<Vec2> {
    if spawn_points.0.is_empty() {
        return None;
    }

    for _ in 0..SPAWN_ATTEMPTS {
        let candidate = spawn_points.0[rng.random_range(0..spawn_points.0.len())];

        if candidate.distance(player_pos) < min_player_distance {
            continue;
        }
        if obstacles.overlaps_circle(candidate, clearance) {
            continue;
        }
        if occupied(candidate) {
            continue;
        }

        return Some(candidate);
    }
    None
}

// ============================================================================
// Spawn Systems
// ============================================================================

// Startup: the single player starts in the middle of town
pub fn player_spawn_system(mut commands: Commands) {
    commands.spawn(player_bundle(Vec2::ZERO));
    info!("player spawned at the origin");
}

// Timed cop spawning with a difficulty ramp
pub fn cop_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<ArenaSettings>,
    obstacles: Res<ObstacleField>,
    spawn_points: Res<SpawnPoints>,
    mut spawner: ResMut<CopSpawner>,
    mut rng: ResMut<SimRng>,
    player: Query<&Position, With<PlayerMarker>>,
    cops: Query<(), With<CopMarker>>,
) {
    let Ok(player_pos) = player.single() else {
        return;
    };
    let delta = time.delta_secs();

    spawner.ramp_timer += delta;
    if spawner.ramp_timer >= COP_RAMP_EVERY {
        spawner.ramp_timer = 0.0;
        spawner.ramp();
        info!(
            "difficulty ramp: spawn every {:.1}s, up to {} cops",
            spawner.interval, spawner.max_cops
        );
    }

    spawner.spawn_timer += delta;
    if spawner.spawn_timer < spawner.interval {
        return;
    }
    spawner.spawn_timer = 0.0;

    let count = cops.iter().count() as u32;
    if count >= spawner.max_cops {
        return;
    }

    let Some(position) = find_spawn_point(
        &mut rng.rng,
        &spawn_points,
        &obstacles,
        player_pos.0,
        COP_SPAWN_MIN_PLAYER_DISTANCE,
        COP_SPAWN_CLEARANCE,
        |_| false,
    ) else {
        warn!("no valid cop spawn point this cycle");
        return;
    };

    let id = AgentId(spawner.next_id);
    spawner.next_id += 1;
    let personality = Personality::roll(&settings.chase, &mut rng.rng);
    commands.spawn(cop_bundle(ChaseAgent::new(id, settings.chase, personality), position));

    info!(
        "cop {} spawned at ({:.1}, {:.1}), speed {:.2}",
        id.0, position.x, position.y, personality.speed
    );
}
