//! Explicit entity factories.
//!
//! Every entity enters the world through one of these functions, so spawn
//! side effects are visible at the call site instead of hidden behind
//! constructor registration.

use bevy_ecs::{entity::Entity, system::Commands};
use glam::Vec2;
use tracing::debug;

use crate::asset::SpriteKind;
use crate::constants::{layout, scoring, STAGE_RECT};
use crate::geometry::Rect;
use crate::systems::components::{
    Barricade, BarricadeBundle, Beam, BeamBundle, BulletBundle, Enemy, EnemyBundle, Explosion, ExplosionBundle,
    FormationMovement, Player, PlayerBullet, PlayerBundle, Position, Renderable, Stun,
};

/// Spawns the player ship at the bottom center of the stage.
pub fn spawn_player(commands: &mut Commands) -> Entity {
    let rect = Rect::new(
        STAGE_RECT.size.x / 2.0,
        STAGE_RECT.size.y - layout::PLAYER_SIZE.y,
        layout::PLAYER_SIZE.x,
        layout::PLAYER_SIZE.y,
    );
    commands
        .spawn(PlayerBundle {
            player: Player::default(),
            position: Position(rect),
            stun: Stun::default(),
            sprite: Renderable {
                kind: SpriteKind::Player,
                frame: 0,
            },
        })
        .id()
}

/// Spawns the player's bullet, centered on `center`.
pub fn spawn_bullet(commands: &mut Commands, center: Vec2) -> Entity {
    commands
        .spawn(BulletBundle {
            bullet: PlayerBullet,
            position: Position(Rect::from_center(center, layout::BULLET_SIZE)),
            stun: Stun::default(),
            sprite: Renderable {
                kind: SpriteKind::Bullet,
                frame: 0,
            },
        })
        .id()
}

/// Spawns an enemy beam, centered on `center`.
pub fn spawn_beam(commands: &mut Commands, center: Vec2) -> Entity {
    commands
        .spawn(BeamBundle {
            beam: Beam,
            position: Position(Rect::from_center(center, layout::BEAM_SIZE)),
            stun: Stun::default(),
            sprite: Renderable {
                kind: SpriteKind::Beam,
                frame: 0,
            },
        })
        .id()
}

/// Spawns an explosion effect, centered on `center`.
pub fn spawn_explosion(commands: &mut Commands, center: Vec2) -> Entity {
    commands
        .spawn(ExplosionBundle {
            explosion: Explosion::default(),
            position: Position(Rect::from_center(center, layout::EXPLOSION_SIZE)),
            stun: Stun::default(),
            sprite: Renderable {
                kind: SpriteKind::Explosion,
                frame: 0,
            },
        })
        .id()
}

/// Point value and sprite for a wave row, counted from the top.
fn row_kind(row: u32) -> (u32, SpriteKind) {
    match row {
        0 => (scoring::TOP_ROW_POINTS, SpriteKind::Enemy30),
        1 | 2 => (scoring::MIDDLE_ROW_POINTS, SpriteKind::Enemy20),
        _ => (scoring::BOTTOM_ROW_POINTS, SpriteKind::Enemy10),
    }
}

/// Spawns a full 10×5 wave for the given stage.
///
/// The wave's first row starts lower on the stage as stages advance, cycling
/// every [`layout::WAVE_DESCENT_CYCLE`] stages.
pub fn spawn_wave(commands: &mut Commands, stage: u32) {
    let start_height = (stage % layout::WAVE_DESCENT_CYCLE + 1) as f32 * layout::WAVE_DESCENT;
    for row in 0..layout::WAVE_ROWS {
        let (points, kind) = row_kind(row);
        for column in 0..layout::WAVE_COLUMNS {
            let center = Vec2::new(
                column as f32 * layout::WAVE_SPACING + layout::WAVE_LEFT,
                row as f32 * layout::WAVE_SPACING + start_height,
            );
            commands.spawn(EnemyBundle {
                enemy: Enemy { points },
                movement: FormationMovement::new(layout::ENEMY_SIZE.x),
                position: Position(Rect::from_center(center, layout::ENEMY_SIZE)),
                stun: Stun::default(),
                sprite: Renderable { kind, frame: 0 },
            });
        }
    }
    debug!(stage, start_height, "Spawned enemy wave");
}

/// Spawns one 3×2 barricade block whose top-left cell is centered at
/// `origin`. The top-center cell is left out for the classic notch.
pub fn spawn_barricade_block(commands: &mut Commands, origin: Vec2) {
    for row in 0..layout::BARRICADE_GRID_ROWS {
        for column in 0..layout::BARRICADE_GRID_COLUMNS {
            if row == 0 && column == 1 {
                continue;
            }
            let center = origin + Vec2::new(column as f32, row as f32) * layout::BARRICADE_CELL_SIZE;
            commands.spawn(BarricadeBundle {
                barricade: Barricade::default(),
                position: Position(Rect::from_center(center, layout::BARRICADE_CELL_SIZE)),
                stun: Stun::default(),
                sprite: Renderable {
                    kind: SpriteKind::Barricade,
                    frame: 0,
                },
            });
        }
    }
}

/// Spawns all four barricade blocks at their fixed screen positions.
pub fn spawn_barricades(commands: &mut Commands) {
    for block in layout::BARRICADE_BLOCKS {
        spawn_barricade_block(commands, block);
    }
}

/// Spawns a complete fresh session: the player ship, the barricade line,
/// and the first wave.
pub fn spawn_session(commands: &mut Commands) {
    spawn_player(commands);
    spawn_barricades(commands);
    spawn_wave(commands, 0);
}
