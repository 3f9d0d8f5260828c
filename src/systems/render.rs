//! Frame rendering: field entities, HUD, and the title and game-over screens.

use bevy_ecs::event::{EventReader, EventWriter};
use bevy_ecs::system::{NonSend, NonSendMut, Query, Res};
use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::error;

use crate::asset::SpriteKind;
use crate::constants::{layout, ui, CANVAS_SIZE};
use crate::error::{GameError, TextureError};
use crate::systems::components::{Player, Position, Renderable, Score, StageCounter};
use crate::systems::state::GameStage;
use crate::texture::sheet::SpriteSheets;
use crate::texture::text::{FontSize, TextRenderer};

fn to_sdl(rect: &crate::geometry::Rect) -> SdlRect {
    SdlRect::new(
        rect.pos.x as i32,
        rect.pos.y as i32,
        rect.size.x as u32,
        rect.size.y as u32,
    )
}

/// Draws one complete frame and presents it.
///
/// The playfield and HUD are only drawn during play; the title and
/// game-over screens are text on black.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut canvas: NonSendMut<&mut Canvas<Window>>,
    sheets: NonSend<SpriteSheets>,
    text: NonSend<TextRenderer>,
    stage: Res<GameStage>,
    score: Res<Score>,
    counter: Res<StageCounter>,
    renderables: Query<(&Renderable, &Position)>,
    players: Query<&Player>,
    mut errors: EventWriter<GameError>,
) {
    let canvas = &mut **canvas;
    canvas.set_draw_color(Color::BLACK);
    canvas.clear();

    let mut report = |result: Result<(), TextureError>| {
        if let Err(e) = result {
            errors.write(e.into());
        }
    };

    match *stage {
        GameStage::Start => {
            report(text.render_centered(canvas, "INVADER GAME", ui::TITLE_Y, FontSize::Title, Color::WHITE));
            report(text.render_centered(
                canvas,
                "PUSH SPACE KEY",
                ui::TITLE_PROMPT_Y,
                FontSize::Text,
                Color::WHITE,
            ));
        }
        GameStage::Playing => {
            for (renderable, position) in renderables.iter() {
                report(sheets.render(canvas, renderable.kind, renderable.frame, to_sdl(&position.0)));
            }

            report(text.render_at(canvas, &format!("SCORE: {}", score.0), 0, 0, FontSize::Text, Color::WHITE));
            report(text.render_at(
                canvas,
                &format!("STAGE: {}", counter.0 + 1),
                0,
                ui::TEXT_FONT_SIZE as i32,
                FontSize::Text,
                Color::WHITE,
            ));
            if let Ok(player) = players.single() {
                report(text.render_right_aligned(
                    canvas,
                    "LIFE:",
                    CANVAS_SIZE.x as i32 - ui::LIFE_ICON_RIGHT_MARGIN - 4,
                    0,
                    FontSize::Text,
                    Color::WHITE,
                ));
                for life in 0..player.lives {
                    let x = CANVAS_SIZE.x as i32 - ui::LIFE_ICON_RIGHT_MARGIN + life as i32 * ui::LIFE_ICON_SPACING;
                    let dest = SdlRect::new(x, 0, layout::PLAYER_SIZE.x as u32, layout::PLAYER_SIZE.y as u32);
                    report(sheets.render(canvas, SpriteKind::Player, 0, dest));
                }
            }
        }
        GameStage::GameOver => {
            report(text.render_centered(canvas, "GAME OVER", ui::GAMEOVER_TITLE_Y, FontSize::Title, Color::WHITE));
            report(text.render_centered(
                canvas,
                "PUSH SPACE KEY",
                ui::GAMEOVER_PROMPT_Y,
                FontSize::Text,
                Color::WHITE,
            ));
        }
    }

    canvas.present();
}

/// Drains non-fatal error events into the log so a bad frame never aborts
/// the loop.
pub fn error_report_system(mut errors: EventReader<GameError>) {
    for e in errors.read() {
        error!(error = %e, "Game error");
    }
}
