//! Sprite sheet loading and frame rendering.
//!
//! Every sprite asset is a horizontal strip of equal-width frames. Sheets are
//! sliced at load time by each sprite's declared frame count, so a malformed
//! strip is rejected at startup rather than drawing garbage mid-game.

use std::collections::HashMap;

use sdl2::image::LoadTexture;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use strum::IntoEnumIterator;
use tracing::debug;

use crate::asset::{self, SpriteKind};
use crate::error::{GameResult, TextureError};

/// One loaded sprite strip, pre-sliced into its animation frames.
pub struct SpriteSheet {
    texture: Texture,
    frame_width: u32,
    height: u32,
    frames: usize,
}

impl SpriteSheet {
    /// Loads the strip for `kind` and validates its frame geometry.
    pub fn load(creator: &TextureCreator<WindowContext>, kind: SpriteKind) -> GameResult<Self> {
        let path = kind.path();
        let bytes = asset::read_bytes(&path)?;
        let texture = creator
            .load_texture_bytes(&bytes)
            .map_err(|e| TextureError::LoadFailed(format!("{}: {e}", path.display())))?;

        let query = texture.query();
        let frames = kind.frame_count() as usize;
        if query.width % frames as u32 != 0 {
            return Err(TextureError::InvalidFormat(format!(
                "{}: width {} not divisible into {} frames",
                path.display(),
                query.width,
                frames
            ))
            .into());
        }

        Ok(Self {
            texture,
            frame_width: query.width / frames as u32,
            height: query.height,
            frames,
        })
    }

    /// Copies one frame into `dest`, wrapping out-of-range frame indices.
    pub fn render(&self, canvas: &mut Canvas<Window>, frame: usize, dest: Rect) -> Result<(), TextureError> {
        let frame = frame % self.frames;
        let src = Rect::new(
            (frame as u32 * self.frame_width) as i32,
            0,
            self.frame_width,
            self.height,
        );
        canvas.copy(&self.texture, src, dest).map_err(TextureError::RenderFailed)
    }
}

/// The full set of sprite sheets, keyed by sprite kind.
///
/// Lives as a non-send resource since SDL textures are tied to the render
/// thread.
pub struct SpriteSheets {
    sheets: HashMap<SpriteKind, SpriteSheet>,
}

impl SpriteSheets {
    /// Loads every sheet up front. Any missing or malformed asset aborts
    /// startup with the offending path in the error.
    pub fn load_all(creator: &TextureCreator<WindowContext>) -> GameResult<Self> {
        let mut sheets = HashMap::new();
        for kind in SpriteKind::iter() {
            sheets.insert(kind, SpriteSheet::load(creator, kind)?);
        }
        debug!(count = sheets.len(), "Loaded sprite sheets");
        Ok(Self { sheets })
    }

    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        kind: SpriteKind,
        frame: usize,
        dest: Rect,
    ) -> Result<(), TextureError> {
        let sheet = self
            .sheets
            .get(&kind)
            .ok_or_else(|| TextureError::RenderFailed(format!("No sheet for sprite {kind}")))?;
        sheet.render(canvas, frame, dest)
    }
}
