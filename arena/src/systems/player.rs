use bevy::prelude::*;
use tracing::info;

use crate::{components::Cop, config::ArenaSettings, constants::*, resources::GameState};
use common::{
    components::{Bomb, Collider, Facing, Pickup, Position, Velocity},
    constants::{BOMB_FUSE_TIME, PLAYER_SPEED},
    markers::{BombMarker, PickupMarker, PlayerMarker},
};

// ============================================================================
// Movement Input
// ============================================================================

// Turn a wanted direction into keyboard-style axis input: each axis is -1, 0
// or 1, and any horizontal input suppresses the vertical one.
#[must_use]
pub fn movement_input(direction: Vec2) -> Vec2 {
    let axis = |value: f32| {
        if value > PLAYER_AXIS_DEADZONE {
            1.0
        } else if value < -PLAYER_AXIS_DEADZONE {
            -1.0
        } else {
            0.0
        }
    };

    let x = axis(direction.x);
    let y = if x == 0.0 { axis(direction.y) } else { 0.0 };
    Vec2::new(x, y)
}

// ============================================================================
// Player Autopilot System
// ============================================================================

// Stands in for a human: flee the closest dangerous cop, otherwise go for the
// closest coin, and throw a bomb at a cop that gets too close.
pub fn player_autopilot_system(
    mut commands: Commands,
    time: Res<Time>,
    settings: Res<ArenaSettings>,
    mut state: ResMut<GameState>,
    mut player: Query<(&Position, &mut Velocity, &mut Facing), With<PlayerMarker>>,
    cops: Query<(&Cop, &Position)>,
    pickups: Query<(&Pickup, &Position), With<PickupMarker>>,
) {
    let Ok((player_pos, mut player_vel, mut facing)) = player.single_mut() else {
        return;
    };
    let delta = time.delta_secs();
    state.bomb_cooldown = (state.bomb_cooldown - delta).max(0.0);

    // Dancing cops are harmless
    let threat = cops
        .iter()
        .filter(|(cop, _)| !cop.0.is_stunned())
        .map(|(_, pos)| pos.0)
        .min_by(|a, b| a.distance_squared(player_pos.0).total_cmp(&b.distance_squared(player_pos.0)));

    let coin = pickups
        .iter()
        .filter(|(pickup, _)| matches!(pickup, Pickup::Coin { .. }))
        .map(|(_, pos)| pos.0)
        .min_by(|a, b| a.distance_squared(player_pos.0).total_cmp(&b.distance_squared(player_pos.0)));

    let wish = match (threat, coin) {
        (Some(cop), _) if cop.distance(player_pos.0) <= PLAYER_DANGER_RANGE => player_pos.0 - cop,
        (_, Some(coin)) => coin - player_pos.0,
        _ => Vec2::ZERO,
    };

    player_vel.0 = movement_input(wish.normalize_or_zero()) * PLAYER_SPEED;
    if player_vel.0.x != 0.0 {
        facing.left = player_vel.0.x < 0.0;
    }

    let Some(cop) = threat else {
        return;
    };
    let can_throw = settings.bombs_enabled && state.bombs > 0 && state.bomb_cooldown <= 0.0;
    if can_throw && cop.distance(player_pos.0) <= PLAYER_BOMB_THROW_RANGE {
        // Lob it so it lands where the cop stands when the fuse runs out
        let throw = (cop - player_pos.0) / BOMB_FUSE_TIME;
        commands.spawn((
            BombMarker,
            Bomb::new(),
            Position(player_pos.0),
            Velocity(throw),
            Collider { radius: BOMB_RADIUS },
        ));
        state.bombs -= 1;
        state.bomb_cooldown = PLAYER_BOMB_COOLDOWN;
        info!("boogie bomb thrown, {} left", state.bombs);
    }
}
