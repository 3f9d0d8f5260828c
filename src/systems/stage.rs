//! Wave progression: respawning the enemy formation once it is cleared.

use bevy_ecs::{
    query::With,
    system::{Commands, Query, Res, ResMut},
};
use tracing::info;

use crate::spawn::spawn_wave;
use crate::systems::components::{Enemy, StageCounter};
use crate::systems::state::GameStage;

/// Spawns the next wave as soon as the field holds no enemies.
///
/// Runs in every stage, so a fresh session already has its first
/// formation in place before play begins. The counter only advances for
/// waves cleared during play.
pub fn wave_system(
    mut commands: Commands,
    mut counter: ResMut<StageCounter>,
    stage: Res<GameStage>,
    enemies: Query<(), With<Enemy>>,
) {
    if !enemies.is_empty() {
        return;
    }

    if matches!(*stage, GameStage::Playing) {
        counter.0 += 1;
        info!(stage = counter.0 + 1, "Wave cleared, spawning next");
    }
    spawn_wave(&mut commands, counter.0);
}
