//! Player movement and fire control.

use bevy_ecs::{
    query::With,
    system::{Commands, Query, Res},
};
use glam::Vec2;

use crate::constants::STAGE_RECT;
use crate::spawn::spawn_bullet;
use crate::systems::components::{InputState, Player, PlayerBullet, Position, Renderable, Stun};

/// Applies held movement keys to the player and fires when possible.
///
/// A positive stun counter suppresses the whole update for that tick and
/// swaps the sprite to the hit pose; the counter itself is what alternates
/// the player's two frames during the battlefield freeze.
pub fn player_control_system(
    mut commands: Commands,
    input: Res<InputState>,
    bullets: Query<(), With<PlayerBullet>>,
    mut players: Query<(&Player, &mut Position, &mut Stun, &mut Renderable)>,
) {
    for (player, mut position, mut stun, mut sprite) in players.iter_mut() {
        if stun.0 > 0 {
            stun.0 -= 1;
            sprite.frame = 1;
            continue;
        }
        sprite.frame = 0;

        if input.left {
            position.0.translate(Vec2::new(-player.speed, 0.0));
        } else if input.right {
            position.0.translate(Vec2::new(player.speed, 0.0));
        }
        position.0 = position.0.clamp_within(&STAGE_RECT);

        // Single bullet in flight, enforced here rather than by the bullet.
        if input.fire && bullets.is_empty() {
            spawn_bullet(&mut commands, position.0.center());
        }
    }
}
