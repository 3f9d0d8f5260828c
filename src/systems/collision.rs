//! Collision resolution across entity groups, with scoring and life loss.

use std::collections::HashSet;

use bevy_ecs::{
    entity::Entity,
    query::With,
    system::{Commands, Query, ResMut},
};
use tracing::{debug, info};

use crate::constants::mechanics;
use crate::spawn::spawn_explosion;
use crate::systems::components::{Barricade, Beam, Enemy, Player, PlayerBullet, Position, Score, Stun};
use crate::systems::state::GameStage;

/// Resolves all inter-group collisions for one tick.
///
/// Four passes run in a fixed order: enemy×bullet, player×beam,
/// barricade×bullet, barricade×beam. An entity consumed by an earlier pass
/// is recorded in a consumed set and ignored by every later pass, so a
/// bullet can never score against an enemy and a barricade in the same tick.
pub fn collision_system(
    mut commands: Commands,
    mut score: ResMut<Score>,
    mut stage: ResMut<GameStage>,
    enemies: Query<(Entity, &Enemy, &Position)>,
    bullets: Query<(Entity, &Position), With<PlayerBullet>>,
    beams: Query<(Entity, &Position), With<Beam>>,
    mut players: Query<(Entity, &mut Player, &Position)>,
    mut barricades: Query<(Entity, &mut Barricade, &Position)>,
    mut stunned: Query<&mut Stun>,
) {
    let mut consumed: HashSet<Entity> = HashSet::new();

    // Enemy × bullet: first match consumes both.
    for (enemy_entity, enemy, enemy_position) in enemies.iter() {
        for (bullet_entity, bullet_position) in bullets.iter() {
            if consumed.contains(&bullet_entity) || !enemy_position.0.overlaps(&bullet_position.0) {
                continue;
            }
            consumed.insert(enemy_entity);
            consumed.insert(bullet_entity);
            commands.entity(enemy_entity).despawn();
            commands.entity(bullet_entity).despawn();
            spawn_explosion(&mut commands, enemy_position.0.center());
            score.0 += enemy.points;
            debug!(points = enemy.points, score = score.0, "Enemy destroyed");
            break;
        }
    }

    // Player × beam: every overlapping beam is destroyed; one hit is counted.
    for (player_entity, mut player, player_position) in players.iter_mut() {
        let mut hit = false;
        for (beam_entity, beam_position) in beams.iter() {
            if consumed.contains(&beam_entity) || !player_position.0.overlaps(&beam_position.0) {
                continue;
            }
            consumed.insert(beam_entity);
            commands.entity(beam_entity).despawn();
            hit = true;
        }
        if hit {
            if player.lives == 0 {
                consumed.insert(player_entity);
                commands.entity(player_entity).despawn();
                info!("Player destroyed, game over");
                *stage = GameStage::GameOver;
            } else {
                player.lives -= 1;
                info!(lives = player.lives, "Player hit");
                spawn_explosion(&mut commands, player_position.0.center());
                // Battlefield freeze: stun everything currently alive.
                for mut stun in stunned.iter_mut() {
                    stun.0 = mechanics::STUN_TICKS;
                }
            }
        }
    }

    // Barricades absorb both bullets and beams; the cell itself survives
    // until its own per-tick check removes it.
    for (_, mut barricade, barricade_position) in barricades.iter_mut() {
        for (bullet_entity, bullet_position) in bullets.iter() {
            if consumed.contains(&bullet_entity) || !barricade_position.0.overlaps(&bullet_position.0) {
                continue;
            }
            consumed.insert(bullet_entity);
            commands.entity(bullet_entity).despawn();
            barricade.damage += 1;
        }
        for (beam_entity, beam_position) in beams.iter() {
            if consumed.contains(&beam_entity) || !barricade_position.0.overlaps(&beam_position.0) {
                continue;
            }
            consumed.insert(beam_entity);
            commands.entity(beam_entity).despawn();
            barricade.damage += 1;
        }
    }
}
