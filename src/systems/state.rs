//! The session state machine: title screen, play, and game over.

use bevy_ecs::{
    entity::Entity,
    event::EventReader,
    query::With,
    resource::Resource,
    system::{Commands, Query, ResMut},
};
use tracing::info;

use crate::events::{GameCommand, GameEvent};
use crate::spawn::spawn_session;
use crate::systems::components::{GlobalState, Position, Score, StageCounter};

/// The coarse stage the session is in. Simulation systems only run while
/// `Playing`; the title and game-over screens keep the field frozen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStage {
    #[default]
    Start,
    Playing,
    GameOver,
}

/// Drains the input event stream: exit commands flip the global exit flag,
/// fire-key releases advance the stage machine.
///
/// `Start` hands control to the player. `GameOver` tears the whole field
/// down and rebuilds a fresh session before dropping straight back into
/// play, so nothing from the lost game leaks into the next one.
pub fn state_system(
    mut commands: Commands,
    mut stage: ResMut<GameStage>,
    mut score: ResMut<Score>,
    mut counter: ResMut<StageCounter>,
    mut global: ResMut<GlobalState>,
    mut events: EventReader<GameEvent>,
    field: Query<Entity, With<Position>>,
) {
    let mut fired = false;
    for event in events.read() {
        match event {
            GameEvent::Command(GameCommand::Exit) => global.exit = true,
            GameEvent::FireReleased => fired = true,
        }
    }
    if !fired {
        return;
    }

    match *stage {
        GameStage::Start => {
            info!("Session started");
            *stage = GameStage::Playing;
        }
        GameStage::Playing => {}
        GameStage::GameOver => {
            info!("Session reset");
            for entity in field.iter() {
                commands.entity(entity).despawn();
            }
            score.0 = 0;
            counter.0 = 0;
            spawn_session(&mut commands);
            *stage = GameStage::Playing;
        }
    }
}
