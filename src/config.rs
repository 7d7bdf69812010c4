//! Game configuration
//!
//! Tunables and asset paths, read from a RON file. Every field has a
//! default, so a partial file only overrides what it names and a missing
//! file means "all defaults".

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::app::AppMode;

/// Config file looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "willowbrook.ron";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Image path and draw size for one sprite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAsset {
    pub path: String,
    /// World-space size (width, height)
    pub size: (f32, f32),
}

impl SpriteAsset {
    fn new(path: &str, size: (f32, f32)) -> Self {
        Self { path: path.to_string(), size }
    }
}

/// Sprites used by the entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteAssets {
    pub player: SpriteAsset,
    pub rock: SpriteAsset,
    /// Nothing spawns trees yet, so the tree sprite is only loaded when configured
    pub tree: Option<SpriteAsset>,
}

impl Default for SpriteAssets {
    fn default() -> Self {
        Self {
            player: SpriteAsset::new("assets/player.png", (16.0, 16.0)),
            rock: SpriteAsset::new("assets/rock.png", (16.0, 16.0)),
            tree: None,
        }
    }
}

/// One paintable tile. Tiles without an image draw as a flat color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileAsset {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
    /// 0xRRGGBB
    #[serde(default = "default_tile_color")]
    pub color: u32,
}

fn default_tile_color() -> u32 {
    0xFFFFFF
}

fn default_tiles() -> Vec<TileAsset> {
    vec![
        TileAsset { name: "grass".into(), path: Some("assets/tiles/grass.png".into()), color: 0x5A8F3C },
        TileAsset { name: "dirt".into(), path: Some("assets/tiles/dirt.png".into()), color: 0x8B6B3E },
        TileAsset { name: "water".into(), path: Some("assets/tiles/water.png".into()), color: 0x3E6B8B },
        TileAsset { name: "stone".into(), path: None, color: 0x7A7A80 },
    ]
}

/// Everything tunable without a rebuild
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Mode the app starts in (overridden by `--mode`)
    pub start_mode: AppMode,
    /// Background color, 0xRRGGBB
    pub clear_color: u32,
    pub camera_zoom: f32,
    /// Camera smoothing rate, see [`crate::game::camera::advance`]
    pub camera_rate: f32,
    /// Player speed in world units per second
    pub player_speed: f32,
    /// Editor camera pan speed in world units per second
    pub editor_pan_speed: f32,
    pub sprites: SpriteAssets,
    pub tiles: Vec<TileAsset>,
    /// Where F5/F9 save and load the tile map
    pub map_path: String,
    /// Overlay font; the built-in font is used when unset
    pub font_path: Option<String>,
    pub font_size: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_mode: AppMode::Playing,
            clear_color: 0x2D2D34,
            camera_zoom: 1.0,
            camera_rate: 15.0,
            player_speed: 32.0,
            editor_pan_speed: 400.0,
            sprites: SpriteAssets::default(),
            tiles: default_tiles(),
            map_path: "maps/willowbrook.ron".to_string(),
            font_path: None,
            font_size: 16,
        }
    }
}

impl GameConfig {
    /// Parse a config from RON text
    pub fn from_ron(s: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path`, or fall back to defaults when it does not exist.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                log::info!("Loaded config from {}", path.display());
                Self::from_ron(&contents, path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path: path.to_path_buf(), source }),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.camera_zoom > 0.0) {
            return Err(ConfigError::Invalid(format!("camera_zoom must be positive, got {}", self.camera_zoom)));
        }
        for (name, value) in [
            ("camera_rate", self.camera_rate),
            ("player_speed", self.player_speed),
            ("editor_pan_speed", self.editor_pan_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{} must be a non-negative number, got {}", name, value)));
            }
        }
        if self.tiles.len() > u16::MAX as usize {
            return Err(ConfigError::Invalid(format!("too many tiles ({})", self.tiles.len())));
        }
        Ok(())
    }
}
