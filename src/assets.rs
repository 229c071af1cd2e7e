//! Asset collaborator
//!
//! Every texture the game blits is named up front by `Sprite`. The
//! catalog resolves all of them to files at startup and refuses to run
//! with any texture missing, which turns a mid-game blit failure into a
//! clear startup diagnostic.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Every texture the game can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Ground,
    Tank,
    AirBalloon,
    Airship,
    LandExplosion,
    AirExplosion,
    /// Placeholder art for anything without its own texture
    Fallback,
}

impl Sprite {
    pub const ALL: [Sprite; 7] = [
        Sprite::Ground,
        Sprite::Tank,
        Sprite::AirBalloon,
        Sprite::Airship,
        Sprite::LandExplosion,
        Sprite::AirExplosion,
        Sprite::Fallback,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Sprite::Ground => "ground.png",
            Sprite::Tank => "tank.png",
            Sprite::AirBalloon => "air_balloon.png",
            Sprite::Airship => "airship.png",
            Sprite::LandExplosion => "land_explosion.png",
            Sprite::AirExplosion => "air_explosion.png",
            Sprite::Fallback => "default.png",
        }
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("missing texture {}", path.display())]
    Missing { path: PathBuf },
}

/// Resolved sprite files. Renderer backends read pixels from here; the
/// simulation never touches it.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    paths: HashMap<Sprite, PathBuf>,
}

impl AssetCatalog {
    /// Resolve every sprite under `dir`, failing on the first missing
    /// file.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let mut paths = HashMap::new();
        for sprite in Sprite::ALL {
            let path = dir.join(sprite.file_name());
            if !path.is_file() {
                return Err(AssetError::Missing { path });
            }
            paths.insert(sprite, path);
        }
        Ok(Self { paths })
    }

    pub fn path(&self, sprite: Sprite) -> &Path {
        &self.paths[&sprite]
    }
}
