//! Enemy formation movement and the formation-wide step-down protocol.

use bevy_ecs::{
    query::With,
    system::{Commands, Query, ResMut},
};
use glam::Vec2;
use rand::Rng;
use tracing::info;

use crate::constants::{mechanics, STAGE_RECT};
use crate::spawn::spawn_beam;
use crate::systems::components::{Enemy, FormationMovement, GameRng, Position, Renderable, Stun};
use crate::systems::state::GameStage;

/// Advances each enemy's movement timer and executes movement events.
///
/// When the timer fires, the enemy either slides sideways by `step` or, if
/// the formation has been halted, drops by its own height: the interval
/// shrinks, `step` flips sign, and horizontal travel resumes. The interval
/// is shrunk before the timer reset so the timer never exceeds it. Beam fire
/// is rolled every tick, independent of the timer phase.
pub fn enemy_movement_system(
    mut commands: Commands,
    mut rng: ResMut<GameRng>,
    mut enemies: Query<(&mut FormationMovement, &mut Position, &mut Stun, &mut Renderable), With<Enemy>>,
) {
    for (mut movement, mut position, mut stun, mut sprite) in enemies.iter_mut() {
        if stun.0 > 0 {
            stun.0 -= 1;
            continue;
        }

        if movement.timer == 0 {
            if movement.moving_horizontally {
                let step = movement.step;
                position.0.translate(Vec2::new(step, 0.0));
                movement.just_stepped_down = false;
            } else {
                let drop = position.0.size.y;
                position.0.translate(Vec2::new(0.0, drop));
                movement.interval = movement.interval.saturating_sub(mechanics::STEP_INTERVAL_DECREMENT);
                movement.just_stepped_down = true;
                movement.step = -movement.step;
                movement.moving_horizontally = true;
            }
            movement.timer = movement.interval;
            movement.animation_frame = movement.animation_frame.wrapping_add(1);
            sprite.frame = (movement.animation_frame % 2) as usize;
        }
        movement.timer = movement.timer.saturating_sub(1);

        if rng.0.random::<f64>() < mechanics::BEAM_PROBABILITY {
            spawn_beam(&mut commands, position.0.center());
        }
    }
}

/// Evaluates the formation-wide rules once per tick, after enemy updates.
///
/// If any enemy whose timer just fired would cross the stage boundary on its
/// next horizontal step (and it did not just step down), every enemy is
/// halted so the next timer fire performs a synchronized step-down. The same
/// pass checks the loss condition: an enemy bottom past 90% of the stage
/// height ends the game.
pub fn formation_system(mut stage: ResMut<GameStage>, mut enemies: Query<(&mut FormationMovement, &Position), With<Enemy>>) {
    let lose_line = STAGE_RECT.size.y * mechanics::LOSE_LINE_RATIO;
    let mut halt = false;

    for (movement, position) in enemies.iter() {
        if position.0.bottom() > lose_line {
            if *stage != GameStage::GameOver {
                info!("Formation reached the lose line");
                *stage = GameStage::GameOver;
            }
        }

        let crossing = if movement.step >= 0.0 {
            position.0.right() + movement.step >= STAGE_RECT.right()
        } else {
            position.0.left() + movement.step < STAGE_RECT.left()
        };
        if crossing && movement.timer == 0 && !movement.just_stepped_down {
            halt = true;
        }
    }

    if halt {
        for (mut movement, _) in enemies.iter_mut() {
            movement.moving_horizontally = false;
        }
    }
}
