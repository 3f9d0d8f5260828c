//! Short-lived effect entities: explosions and barricade wear.

use bevy_ecs::{
    entity::Entity,
    system::{Commands, Query},
};

use crate::constants::{animation, mechanics};
use crate::systems::components::{Barricade, Explosion, Renderable};

/// Steps explosion animations and removes them once the last frame has been
/// held for its full duration.
pub fn explosion_system(
    mut commands: Commands,
    mut explosions: Query<(Entity, &mut Explosion, &mut Renderable)>,
) {
    for (entity, mut explosion, mut sprite) in explosions.iter_mut() {
        explosion.frame += 1;
        let step = explosion.frame / animation::EXPLOSION_FRAME_HOLD;
        if step >= animation::EXPLOSION_FRAMES {
            commands.entity(entity).despawn();
        } else {
            sprite.frame = step as usize;
        }
    }
}

/// Removes barricade cells that have absorbed more hits than they can take
/// and keeps the damage sprite of surviving cells current.
pub fn barricade_system(
    mut commands: Commands,
    mut barricades: Query<(Entity, &Barricade, &mut Renderable)>,
) {
    for (entity, barricade, mut sprite) in barricades.iter_mut() {
        if barricade.damage > mechanics::BARRICADE_MAX_DAMAGE {
            commands.entity(entity).despawn();
        } else {
            sprite.frame = barricade.damage as usize;
        }
    }
}
