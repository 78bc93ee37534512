use bevy::prelude::*;
use tracing::info;

use crate::{
    constants::*,
    resources::{GameState, Outcome},
};
use common::markers::CopMarker;

// Survival points accrue every tick the run is live
pub fn score_tick_system(time: Res<Time>, mut state: ResMut<GameState>) {
    state.add_score(time.delta_secs() * SCORE_PER_SECOND);
}

// Decide the run: out of lives loses, reaching the win score wins and clears the streets
pub fn outcome_system(mut commands: Commands, mut state: ResMut<GameState>, cops: Query<Entity, With<CopMarker>>) {
    if state.outcome != Outcome::Running {
        return;
    }

    if state.lives == 0 {
        state.outcome = Outcome::GameOver;
        info!("game over, final score {:.0}", state.score);
    } else if state.score >= WIN_SCORE {
        state.outcome = Outcome::Victory;
        let mut removed = 0;
        for entity in &cops {
            commands.entity(entity).despawn();
            removed += 1;
        }
        info!("victory with {:.0} points, {} cops removed", state.score, removed);
    }
}
