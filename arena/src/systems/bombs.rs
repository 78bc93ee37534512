use bevy::prelude::*;
use tracing::info;

use crate::components::Cop;
use common::{
    components::{Bomb, Position},
    markers::{BombMarker, CopMarker},
};

// ============================================================================
// Bomb Fuse System
// ============================================================================

// Burn fuses; on explosion every cop within the blast radius starts dancing.
// Runs before the chase so the stun takes over on the same tick.
pub fn bomb_fuse_system(
    mut commands: Commands,
    time: Res<Time>,
    mut bombs: Query<(Entity, &mut Bomb, &Position), With<BombMarker>>,
    mut cops: Query<(&mut Cop, &Position), With<CopMarker>>,
) {
    for (entity, mut bomb, bomb_pos) in &mut bombs {
        bomb.fuse.tick(time.delta());
        if !bomb.fuse.just_finished() {
            continue;
        }

        let mut dancing = 0;
        for (mut cop, cop_pos) in &mut cops {
            if cop_pos.0.distance(bomb_pos.0) <= bomb.radius {
                cop.0.enter_boogie(bomb.boogie_duration);
                dancing += 1;
            }
        }

        info!(
            "boogie bomb exploded at ({:.1}, {:.1}), {} cops dancing",
            bomb_pos.0.x, bomb_pos.0.y, dancing
        );
        commands.entity(entity).despawn();
    }
}
