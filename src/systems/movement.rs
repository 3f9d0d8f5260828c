//! Projectile movement and off-stage despawning.

use bevy_ecs::{
    entity::Entity,
    query::With,
    system::{Commands, Query},
};
use glam::Vec2;

use crate::constants::{mechanics, STAGE_RECT};
use crate::systems::components::{Beam, PlayerBullet, Position, Stun};

/// Moves the player's bullet upward, despawning it above the stage top.
pub fn bullet_movement_system(
    mut commands: Commands,
    mut bullets: Query<(Entity, &mut Position, &mut Stun), With<PlayerBullet>>,
) {
    for (entity, mut position, mut stun) in bullets.iter_mut() {
        if stun.0 > 0 {
            stun.0 -= 1;
            continue;
        }
        position.0.translate(Vec2::new(0.0, -mechanics::BULLET_SPEED));
        if position.0.top() < STAGE_RECT.top() {
            commands.entity(entity).despawn();
        }
    }
}

/// Moves enemy beams downward, despawning them below the stage bottom.
pub fn beam_movement_system(mut commands: Commands, mut beams: Query<(Entity, &mut Position, &mut Stun), With<Beam>>) {
    for (entity, mut position, mut stun) in beams.iter_mut() {
        if stun.0 > 0 {
            stun.0 -= 1;
            continue;
        }
        position.0.translate(Vec2::new(0.0, mechanics::BEAM_SPEED));
        if position.0.bottom() > STAGE_RECT.bottom() {
            commands.entity(entity).despawn();
        }
    }
}
