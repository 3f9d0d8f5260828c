//! Runtime asset loading from the `assets/` directory.
//!
//! Sprites are horizontal strips sliced into equal-width frames when the
//! textures are built. A missing or unreadable file is fatal at startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use strum_macros::{Display, EnumIter};

use crate::error::AssetError;

/// Directory all assets are resolved against, relative to the working directory.
pub const ASSET_DIR: &str = "assets";

/// Identifies one sprite sheet on disk.
///
/// Doubles as the render key: a `Renderable` names the kind it is drawn from,
/// so simulation code never touches SDL textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum SpriteKind {
    Player,
    Bullet,
    Enemy10,
    Enemy20,
    Enemy30,
    Beam,
    Explosion,
    Barricade,
}

impl SpriteKind {
    pub fn path(&self) -> PathBuf {
        let file = match self {
            SpriteKind::Player => "player.png",
            SpriteKind::Bullet => "bullet.png",
            SpriteKind::Enemy10 => "enemy10.png",
            SpriteKind::Enemy20 => "enemy20.png",
            SpriteKind::Enemy30 => "enemy30.png",
            SpriteKind::Beam => "beam.png",
            SpriteKind::Explosion => "explosion.png",
            SpriteKind::Barricade => "torchka.png",
        };
        Path::new(ASSET_DIR).join("img").join(file)
    }

    /// Number of equal-width frames in this kind's strip.
    pub fn frame_count(&self) -> u32 {
        match self {
            SpriteKind::Player => 2,
            SpriteKind::Bullet => 1,
            SpriteKind::Enemy10 => 2,
            SpriteKind::Enemy20 => 2,
            SpriteKind::Enemy30 => 2,
            SpriteKind::Beam => 1,
            SpriteKind::Explosion => 4,
            SpriteKind::Barricade => 4,
        }
    }
}

/// Path of the font used for all on-screen text.
pub fn font_path() -> PathBuf {
    Path::new(ASSET_DIR).join("font").join("arcade.ttf")
}

/// Reads a whole asset file, mapping failures to a diagnostic naming the path.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, AssetError> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AssetError::NotFound(path.display().to_string()),
        _ => AssetError::Io {
            path: path.display().to_string(),
            source: e,
        },
    })
}
