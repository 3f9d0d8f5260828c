//! Text rendering through the arcade font.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::ttf::{Font, Sdl2TtfContext};
use sdl2::video::{Window, WindowContext};

use crate::asset;
use crate::constants::{ui, CANVAS_SIZE};
use crate::error::{AssetError, GameError, GameResult, TextureError};

/// Which of the two pre-sized fonts to draw with.
#[derive(Debug, Clone, Copy)]
pub enum FontSize {
    Title,
    Text,
}

/// Owns the loaded fonts and renders one-off text textures.
///
/// Text is rasterized per call. The handful of strings drawn per frame is
/// nowhere near enough to justify a glyph cache.
pub struct TextRenderer {
    title: Font<'static, 'static>,
    body: Font<'static, 'static>,
    creator: &'static TextureCreator<WindowContext>,
}

impl TextRenderer {
    /// Loads both font sizes from the asset directory. A missing font file is
    /// fatal, with the path in the error.
    pub fn load(ttf: &'static Sdl2TtfContext, creator: &'static TextureCreator<WindowContext>) -> GameResult<Self> {
        let path = asset::font_path();
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()).into());
        }
        let title = ttf
            .load_font(&path, ui::TITLE_FONT_SIZE)
            .map_err(GameError::Sdl)?;
        let body = ttf
            .load_font(&path, ui::TEXT_FONT_SIZE)
            .map_err(GameError::Sdl)?;
        Ok(Self {
            title,
            body,
            creator,
        })
    }

    /// Draws `text` horizontally centered at height `y`.
    pub fn render_centered(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        y: i32,
        size: FontSize,
        color: Color,
    ) -> Result<(), TextureError> {
        let font = match size {
            FontSize::Title => &self.title,
            FontSize::Text => &self.body,
        };
        let surface = font
            .render(text)
            .blended(color)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        let texture = self
            .creator
            .create_texture_from_surface(&surface)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        let query = texture.query();
        let dest = Rect::new(
            (CANVAS_SIZE.x as i32 - query.width as i32) / 2,
            y,
            query.width,
            query.height,
        );
        canvas.copy(&texture, None, dest).map_err(TextureError::RenderFailed)
    }

    /// Draws `text` with its top-right corner at (`right`, `y`).
    pub fn render_right_aligned(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        right: i32,
        y: i32,
        size: FontSize,
        color: Color,
    ) -> Result<(), TextureError> {
        let font = match size {
            FontSize::Title => &self.title,
            FontSize::Text => &self.body,
        };
        let (width, _) = font
            .size_of(text)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        self.render_at(canvas, text, right - width as i32, y, size, color)
    }

    /// Draws `text` with its top-left corner at (`x`, `y`).
    pub fn render_at(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        x: i32,
        y: i32,
        size: FontSize,
        color: Color,
    ) -> Result<(), TextureError> {
        let font = match size {
            FontSize::Title => &self.title,
            FontSize::Text => &self.body,
        };
        let surface = font
            .render(text)
            .blended(color)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        let texture = self
            .creator
            .create_texture_from_surface(&surface)
            .map_err(|e| TextureError::RenderFailed(e.to_string()))?;
        let query = texture.query();
        let dest = Rect::new(x, y, query.width, query.height);
        canvas.copy(&texture, None, dest).map_err(TextureError::RenderFailed)
    }
}
