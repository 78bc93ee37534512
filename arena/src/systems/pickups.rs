use bevy::prelude::*;
use tracing::{debug, info};

use super::spawn::find_spawn_point;
use crate::{
    constants::*,
    resources::{GameState, PickupSpawner, PickupSpawners, SimRng, SpawnPoints},
};
use common::{
    collision::overlap_bodies,
    components::{Pickup, Position},
    constants::{PICKUP_RADIUS, PLAYER_RADIUS},
    markers::{PickupMarker, PlayerMarker},
    obstacles::ObstacleField,
};

// ============================================================================
// Pickup Spawn System
// ============================================================================

// Coins and bomb pickups appear on street intersections on their own clocks
pub fn pickup_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    obstacles: Res<ObstacleField>,
    spawn_points: Res<SpawnPoints>,
    mut spawners: ResMut<PickupSpawners>,
    mut rng: ResMut<SimRng>,
    player: Query<&Position, With<PlayerMarker>>,
    pickups: Query<(&Pickup, &Position), With<PickupMarker>>,
) {
    let Ok(player_pos) = player.single() else {
        return;
    };
    let delta = time.delta_secs();

    let existing: Vec<(Pickup, Vec2)> = pickups.iter().map(|(pickup, pos)| (*pickup, pos.0)).collect();
    let coins = existing.iter().filter(|(p, _)| matches!(p, Pickup::Coin { .. })).count();
    let bombs = existing.len() - coins;

    let spawners = &mut *spawners;
    let plans = [
        (&mut spawners.coins, coins, Pickup::Coin { points: COIN_POINTS }),
        (
            &mut spawners.bombs,
            bombs,
            Pickup::BoogieBomb {
                amount: BOMB_PICKUP_AMOUNT,
            },
        ),
    ];

    let mut placed: Vec<Vec2> = existing.iter().map(|(_, pos)| *pos).collect();
    for (spawner, alive, pickup) in plans {
        if let Some(position) = try_spawn(spawner, alive, delta, &mut rng, &spawn_points, &obstacles, player_pos.0, &placed) {
            commands.spawn((PickupMarker, pickup, Position(position)));
            placed.push(position);
            debug!("{pickup:?} spawned at ({:.1}, {:.1})", position.x, position.y);
        }
    }
}

// --- private helpers ---

fn try_spawn(
    spawner: &mut PickupSpawner,
    alive: usize,
    delta: f32,
    rng: &mut SimRng,
    spawn_points: &SpawnPoints,
    obstacles: &ObstacleField,
    player_pos: Vec2,
    placed: &[Vec2],
) -> Option<Vec2> {
    if !spawner.due(delta) || alive >= spawner.max_alive {
        return None;
    }

    find_spawn_point(
        &mut rng.rng,
        spawn_points,
        obstacles,
        player_pos,
        spawner.min_player_distance,
        PICKUP_RADIUS,
        |candidate| {
            placed
                .iter()
                .any(|other| overlap_bodies(candidate, PICKUP_RADIUS, *other, PICKUP_RADIUS))
        },
    )
}

// ============================================================================
// Pickup Collection System
// ============================================================================

pub fn pickup_collection_system(
    mut commands: Commands,
    mut state: ResMut<GameState>,
    player: Query<&Position, With<PlayerMarker>>,
    pickups: Query<(Entity, &Pickup, &Position), With<PickupMarker>>,
) {
    let Ok(player_pos) = player.single() else {
        return;
    };

    for (entity, pickup, pos) in &pickups {
        if !overlap_bodies(player_pos.0, PLAYER_RADIUS, pos.0, PICKUP_RADIUS) {
            continue;
        }

        match *pickup {
            Pickup::Coin { points } => {
                state.add_score(points as f32);
                info!("coin collected, score {:.0}", state.score);
            }
            Pickup::BoogieBomb { amount } => {
                state.bombs += amount;
                info!("boogie bomb collected, {} in hand", state.bombs);
            }
        }
        commands.entity(entity).despawn();
    }
}
