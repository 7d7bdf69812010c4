//! Tile map saving and loading
//!
//! Maps are stored as RON. Only painted cells are written, as
//! `(index, tile)` pairs per layer, so a mostly empty 128x128 map stays small.

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use super::{TileId, TileLayers, MAX_LAYERS, TILE_COUNT};

/// Current map file version
pub const MAP_VERSION: u32 = 1;

/// Error type for map loading and saving
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// On-disk representation of [`TileLayers`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMapFile {
    pub version: u32,
    /// Painted cells per layer, bottom layer first
    pub layers: Vec<Vec<(u32, TileId)>>,
}

impl TileMapFile {
    pub fn from_layers(layers: &TileLayers) -> Self {
        Self {
            version: MAP_VERSION,
            layers: layers
                .iter()
                .map(|layer| layer.iter_occupied().map(|(idx, tile)| (idx as u32, tile)).collect())
                .collect(),
        }
    }

    /// Rebuild the layers, rejecting anything that does not fit the grid
    pub fn to_layers(&self) -> Result<TileLayers, MapError> {
        if self.version != MAP_VERSION {
            return Err(MapError::Validation(format!(
                "unsupported map version {} (expected {})",
                self.version, MAP_VERSION
            )));
        }
        if self.layers.len() > MAX_LAYERS {
            return Err(MapError::Validation(format!(
                "too many layers ({} > {})",
                self.layers.len(),
                MAX_LAYERS
            )));
        }

        let mut layers = TileLayers::new();
        for (layer_idx, cells) in self.layers.iter().enumerate() {
            let Some(layer) = layers.layer_mut(layer_idx) else { continue };
            for &(index, tile) in cells {
                if index as usize >= TILE_COUNT {
                    return Err(MapError::Validation(format!(
                        "layer {}: tile index {} out of range",
                        layer_idx, index
                    )));
                }
                layer.set_index(index as usize, Some(tile));
            }
        }
        Ok(layers)
    }
}

/// Serialize layers to a RON string
pub fn tile_map_to_string(layers: &TileLayers) -> Result<String, MapError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());
    Ok(ron::ser::to_string_pretty(&TileMapFile::from_layers(layers), config)?)
}

/// Parse layers from a RON string
pub fn tile_map_from_str(s: &str) -> Result<TileLayers, MapError> {
    let file: TileMapFile = ron::from_str(s)?;
    file.to_layers()
}

/// Write layers to `path`, creating parent directories as needed
pub fn save_tile_map<P: AsRef<Path>>(layers: &TileLayers, path: P) -> Result<(), MapError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, tile_map_to_string(layers)?)?;
    Ok(())
}

/// Read layers from `path`
pub fn load_tile_map<P: AsRef<Path>>(path: P) -> Result<TileLayers, MapError> {
    let contents = fs::read_to_string(path)?;
    tile_map_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_layers() -> TileLayers {
        let mut layers = TileLayers::new();
        layers.paint(0, 0, 0, 1);
        layers.paint(0, 127, 127, 2);
        layers.paint(3, 64, 10, 0);
        layers
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("maps/test.ron");
        let layers = sample_layers();

        save_tile_map(&layers, &path).unwrap();
        let loaded = load_tile_map(&path).unwrap();
        assert_eq!(loaded, layers);
    }

    #[test]
    fn test_file_is_sparse() {
        let file = TileMapFile::from_layers(&sample_layers());
        assert_eq!(file.layers.len(), MAX_LAYERS);
        assert_eq!(file.layers[0].len(), 2);
        assert_eq!(file.layers[1].len(), 0);
        assert_eq!(file.layers[3], vec![(10 * 128 + 64, 0)]);
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let text = format!("(version: 1, layers: [[({}, 1)]])", TILE_COUNT);
        assert!(matches!(tile_map_from_str(&text), Err(MapError::Validation(_))));
    }

    #[test]
    fn test_rejects_wrong_version() {
        let text = "(version: 99, layers: [])";
        assert!(matches!(tile_map_from_str(text), Err(MapError::Validation(_))));
    }

    #[test]
    fn test_rejects_too_many_layers() {
        let text = "(version: 1, layers: [[], [], [], [], [], [], []])";
        assert!(matches!(tile_map_from_str(text), Err(MapError::Validation(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = load_tile_map(dir.path().join("nope.ron"));
        assert!(matches!(result, Err(MapError::Io(_))));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(tile_map_from_str("not ron"), Err(MapError::Parse(_))));
    }
}
