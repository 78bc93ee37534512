use bevy::prelude::*;
use tracing::info;

use crate::{components::Cop, config::ArenaSettings, constants::*, resources::GameState};
use common::{
    chase::Surroundings,
    collision::overlap_bodies,
    components::{AgentId, Facing, Position, Tint, Velocity},
    constants::{COP_RADIUS, PLAYER_RADIUS},
    environment::{AgentRegistry, NeighborSnapshot, SpatialGrid},
    markers::{CopMarker, PlayerMarker},
    obstacles::ObstacleField,
};

// ============================================================================
// Cop Chase System
// ============================================================================

// Step every cop's chase brain against last tick's positions
pub fn cop_chase_system(
    time: Res<Time>,
    settings: Res<ArenaSettings>,
    obstacles: Res<ObstacleField>,
    player: Query<&Position, With<PlayerMarker>>,
    mut cops: Query<(&mut Cop, &Position, &mut Velocity, &mut Facing, &mut Tint), With<CopMarker>>,
) {
    let delta = time.delta_secs();
    let elapsed = time.elapsed_secs();
    let target: Option<Vec2> = player.single().ok().map(|pos| pos.0);

    let positions: Vec<(AgentId, Vec2)> = cops.iter().map(|(cop, pos, ..)| (cop.0.id(), pos.0)).collect();
    let neighbors = neighbor_registry(positions, settings.chase.separation_radius);

    let surroundings = Surroundings {
        target: &target,
        obstacles: Some(&*obstacles),
        neighbors: neighbors.as_ref(),
    };

    for (mut cop, pos, mut vel, mut facing, mut tint) in &mut cops {
        let steering = cop.0.tick(pos.0, delta, elapsed, &surroundings);
        vel.0 = steering.velocity;
        facing.left = steering.face_left;
        tint.0 = steering.tint;
    }
}

// Flat list for a handful of cops, bucketed grid for crowds
fn neighbor_registry(positions: Vec<(AgentId, Vec2)>, cell_size: f32) -> Box<dyn AgentRegistry> {
    if positions.len() <= SPATIAL_GRID_THRESHOLD {
        return Box::new(positions.into_iter().collect::<NeighborSnapshot>());
    }

    let mut grid = SpatialGrid::new(cell_size);
    for (id, pos) in positions {
        grid.insert(id, pos);
    }
    Box::new(grid)
}

// ============================================================================
// Cop Catch System
// ============================================================================

// A cop touching the player costs a life, then the player is briefly untouchable.
// Dancing cops cannot catch anyone.
pub fn cop_catch_system(
    time: Res<Time>,
    mut state: ResMut<GameState>,
    player: Query<&Position, With<PlayerMarker>>,
    cops: Query<(&Cop, &Position), With<CopMarker>>,
) {
    state.invulnerable_timer = (state.invulnerable_timer - time.delta_secs()).max(0.0);
    if state.invulnerable_timer > 0.0 || state.lives == 0 {
        return;
    }

    let Ok(player_pos) = player.single() else {
        return;
    };

    let catcher = cops
        .iter()
        .find(|(cop, pos)| !cop.0.is_stunned() && overlap_bodies(pos.0, COP_RADIUS, player_pos.0, PLAYER_RADIUS));

    if let Some((cop, _)) = catcher {
        state.lives -= 1;
        state.invulnerable_timer = PLAYER_INVULNERABLE_TIME;
        info!("caught by cop {}, {} lives left", cop.0.id().0, state.lives);
    }
}
