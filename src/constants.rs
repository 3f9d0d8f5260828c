//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::{UVec2, Vec2};

use crate::geometry::Rect;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(600, 580);

/// The playfield, as a rectangle. Entities are clamped to and culled against this.
pub const STAGE_RECT: Rect = Rect::new(0.0, 0.0, CANVAS_SIZE.x as f32, CANVAS_SIZE.y as f32);

/// Core simulation tuning. All speeds are in pixels per tick at 60 Hz.
pub mod mechanics {
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_LIVES: u32 = 3;
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BEAM_SPEED: f32 = 5.0;
    /// Per-tick chance of any individual enemy firing a beam.
    pub const BEAM_PROBABILITY: f64 = 0.001;
    /// Battlefield freeze applied to every entity when the player is hit.
    pub const STUN_TICKS: u32 = 20;
    /// Initial ticks between formation movement events.
    pub const STEP_INTERVAL: u32 = 60;
    /// How much the interval shrinks at each step-down.
    pub const STEP_INTERVAL_DECREMENT: u32 = 3;
    /// Damage a barricade cell absorbs before its own update removes it.
    pub const BARRICADE_MAX_DAMAGE: u32 = 3;
    /// Fraction of the stage height the formation must reach to end the game.
    pub const LOSE_LINE_RATIO: f32 = 0.9;
}

/// Entity sizes and fixed screen placements.
pub mod layout {
    use super::Vec2;

    pub const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 16.0);
    pub const BULLET_SIZE: Vec2 = Vec2::new(4.0, 12.0);
    pub const ENEMY_SIZE: Vec2 = Vec2::new(24.0, 24.0);
    pub const BEAM_SIZE: Vec2 = Vec2::new(4.0, 12.0);
    pub const EXPLOSION_SIZE: Vec2 = Vec2::new(24.0, 24.0);
    pub const BARRICADE_CELL_SIZE: Vec2 = Vec2::new(16.0, 16.0);

    pub const WAVE_COLUMNS: u32 = 10;
    pub const WAVE_ROWS: u32 = 5;
    /// Distance between neighbouring enemy centers, both axes.
    pub const WAVE_SPACING: f32 = 30.0;
    /// Center x of the leftmost wave column.
    pub const WAVE_LEFT: f32 = 36.0;
    /// The first wave row descends by this much per stage.
    pub const WAVE_DESCENT: f32 = 48.0;
    /// The starting height cycles after this many stages.
    pub const WAVE_DESCENT_CYCLE: u32 = 8;

    /// Center positions of the four barricade blocks.
    pub const BARRICADE_BLOCKS: [Vec2; 4] = [
        Vec2::new(104.0, 500.0),
        Vec2::new(224.0, 500.0),
        Vec2::new(344.0, 500.0),
        Vec2::new(464.0, 500.0),
    ];
    pub const BARRICADE_GRID_COLUMNS: u32 = 3;
    pub const BARRICADE_GRID_ROWS: u32 = 2;
}

/// Point values by formation row, top to bottom.
pub mod scoring {
    pub const TOP_ROW_POINTS: u32 = 30;
    pub const MIDDLE_ROW_POINTS: u32 = 20;
    pub const BOTTOM_ROW_POINTS: u32 = 10;
}

pub mod animation {
    /// Ticks each explosion frame is held for.
    pub const EXPLOSION_FRAME_HOLD: u32 = 5;
    pub const EXPLOSION_FRAMES: u32 = 4;
}

pub mod ui {
    pub const TITLE_FONT_SIZE: u16 = 70;
    pub const TEXT_FONT_SIZE: u16 = 30;
    /// Horizontal spacing between the life icons in the HUD.
    pub const LIFE_ICON_SPACING: i32 = 26;
    /// Distance of the rightmost life icon from the right screen edge.
    pub const LIFE_ICON_RIGHT_MARGIN: i32 = 78;
    pub const TITLE_Y: i32 = 100;
    pub const TITLE_PROMPT_Y: i32 = 300;
    pub const GAMEOVER_TITLE_Y: i32 = 255;
    pub const GAMEOVER_PROMPT_Y: i32 = 350;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_stage_rect_matches_canvas() {
        assert_eq!(STAGE_RECT.size.x, CANVAS_SIZE.x as f32);
        assert_eq!(STAGE_RECT.size.y, CANVAS_SIZE.y as f32);
        assert_eq!(STAGE_RECT.pos, glam::Vec2::ZERO);
    }

    #[test]
    fn test_wave_fits_on_stage() {
        // Rightmost column center plus half an enemy must stay inside the stage.
        let rightmost = layout::WAVE_LEFT + (layout::WAVE_COLUMNS - 1) as f32 * layout::WAVE_SPACING;
        assert!(rightmost + layout::ENEMY_SIZE.x / 2.0 < STAGE_RECT.size.x);
    }

    #[test]
    fn test_deepest_wave_starts_above_lose_line() {
        let deepest_first_row = layout::WAVE_DESCENT_CYCLE as f32 * layout::WAVE_DESCENT;
        let deepest_last_row = deepest_first_row + (layout::WAVE_ROWS - 1) as f32 * layout::WAVE_SPACING;
        let lose_line = STAGE_RECT.size.y * mechanics::LOSE_LINE_RATIO;
        assert!(deepest_last_row + layout::ENEMY_SIZE.y / 2.0 < lose_line);
    }

    #[test]
    fn test_barricade_blocks_sit_above_player() {
        for block in layout::BARRICADE_BLOCKS {
            assert!(block.y < STAGE_RECT.size.y - layout::PLAYER_SIZE.y);
        }
    }

    #[test]
    fn test_interval_shrinks_but_never_underflows() {
        let mut interval = mechanics::STEP_INTERVAL;
        for _ in 0..100 {
            let next = interval.saturating_sub(mechanics::STEP_INTERVAL_DECREMENT);
            assert!(next <= interval);
            interval = next;
        }
        assert_eq!(interval, 0);
    }
}
