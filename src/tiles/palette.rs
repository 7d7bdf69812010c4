//! Tile Palette
//!
//! Maps a [`TileId`] to what gets drawn for it: an image when one was
//! loaded, otherwise a flat color.

use macroquad::color::Color;
use macroquad::texture::Texture2D;
use super::TileId;

/// Drawn for ids that have no palette entry
pub const MISSING_TILE_COLOR: Color = Color::new(1.0, 0.0, 1.0, 1.0);

/// One paintable tile kind
#[derive(Debug, Clone)]
pub struct PaletteEntry {
    pub name: String,
    pub image: Option<Texture2D>,
    pub color: Color,
}

/// Ordered list of paintable tiles; the position is the tile id
#[derive(Debug, Clone, Default)]
pub struct TilePalette {
    entries: Vec<PaletteEntry>,
}

impl TilePalette {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Append an entry and return its id
    pub fn push(&mut self, entry: PaletteEntry) -> TileId {
        self.entries.push(entry);
        (self.entries.len() - 1) as TileId
    }

    pub fn get(&self, id: TileId) -> Option<&PaletteEntry> {
        self.entries.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fill color for a tile; the magenta fallback for unknown ids
    pub fn color_for(&self, id: TileId) -> Color {
        self.get(id).map(|e| e.color).unwrap_or(MISSING_TILE_COLOR)
    }

    /// Next id after `id`, wrapping around
    pub fn next_id(&self, id: TileId) -> TileId {
        if self.entries.is_empty() {
            return 0;
        }
        ((id as usize + 1) % self.entries.len()) as TileId
    }

    /// Previous id before `id`, wrapping around
    pub fn prev_id(&self, id: TileId) -> TileId {
        if self.entries.is_empty() {
            return 0;
        }
        let len = self.entries.len();
        ((id as usize + len - 1) % len) as TileId
    }
}
