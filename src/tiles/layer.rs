//! Tile Layers
//!
//! Each layer is a dense grid of optional tiles. Layers are stacked by
//! index: layer 0 is drawn first, layer `MAX_LAYERS - 1` ends up on top.

use super::{get_tile_index, in_bounds, MAX_LAYERS, TILE_COUNT};

/// Index into the [`TilePalette`](super::TilePalette)
pub type TileId = u16;

/// One full-grid plane of optional tiles
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    tiles: Vec<Option<TileId>>,
}

impl TileLayer {
    pub fn new() -> Self {
        Self { tiles: vec![None; TILE_COUNT] }
    }

    /// Tile at `(x, y)`; `None` for empty cells and for coordinates off the grid
    pub fn get(&self, x: i32, y: i32) -> Option<TileId> {
        if !in_bounds(x, y) {
            return None;
        }
        self.tiles[get_tile_index(x, y) as usize]
    }

    /// Set or clear the tile at `(x, y)`.
    /// Returns false (and changes nothing) when the coordinates are off the grid.
    pub fn set(&mut self, x: i32, y: i32, tile: Option<TileId>) -> bool {
        if !in_bounds(x, y) {
            return false;
        }
        self.tiles[get_tile_index(x, y) as usize] = tile;
        true
    }

    /// Set a tile by flat index. Returns false when out of range.
    pub fn set_index(&mut self, index: usize, tile: Option<TileId>) -> bool {
        match self.tiles.get_mut(index) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// Iterate all painted cells as `(index, tile)`
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, TileId)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter_map(|(idx, t)| t.map(|tile| (idx, tile)))
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// The full stack of paintable layers
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayers {
    layers: Vec<TileLayer>,
}

impl TileLayers {
    pub fn new() -> Self {
        Self {
            layers: (0..MAX_LAYERS).map(|_| TileLayer::new()).collect(),
        }
    }

    #[cfg(test)]
    pub fn layer(&self, index: usize) -> Option<&TileLayer> {
        self.layers.get(index)
    }

    pub fn layer_mut(&mut self, index: usize) -> Option<&mut TileLayer> {
        self.layers.get_mut(index)
    }

    /// Layers in draw order (bottom first)
    pub fn iter(&self) -> impl Iterator<Item = &TileLayer> {
        self.layers.iter()
    }

    /// Paint a tile on a layer. False if either the layer or the cell is invalid.
    pub fn paint(&mut self, layer: usize, x: i32, y: i32, tile: TileId) -> bool {
        self.layers
            .get_mut(layer)
            .map(|l| l.set(x, y, Some(tile)))
            .unwrap_or(false)
    }

    /// Clear a cell on a layer. False if either the layer or the cell is invalid.
    pub fn erase(&mut self, layer: usize, x: i32, y: i32) -> bool {
        self.layers
            .get_mut(layer)
            .map(|l| l.set(x, y, None))
            .unwrap_or(false)
    }

    /// Total painted cells across all layers
    pub fn occupied_count(&self) -> usize {
        self.layers.iter().map(|l| l.occupied_count()).sum()
    }
}

impl Default for TileLayers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{X_TILE_COUNT, Y_TILE_COUNT};

    #[test]
    fn test_new_layer_is_empty() {
        let layer = TileLayer::new();
        assert_eq!(layer.occupied_count(), 0);
        assert_eq!(layer.get(0, 0), None);
    }

    #[test]
    fn test_set_and_get() {
        let mut layer = TileLayer::new();
        assert!(layer.set(3, 4, Some(2)));
        assert_eq!(layer.get(3, 4), Some(2));
        assert_eq!(layer.iter_occupied().collect::<Vec<_>>(), vec![(get_tile_index(3, 4) as usize, 2)]);
        assert!(layer.set(3, 4, None));
        assert_eq!(layer.get(3, 4), None);
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut layer = TileLayer::new();
        assert!(!layer.set(-1, 0, Some(1)));
        assert!(!layer.set(0, Y_TILE_COUNT, Some(1)));
        assert!(!layer.set(X_TILE_COUNT, 0, Some(1)));
        assert_eq!(layer.get(-1, 0), None);
        assert_eq!(layer.get(X_TILE_COUNT, 5), None);
        assert_eq!(layer.occupied_count(), 0);
        assert!(!layer.set_index(TILE_COUNT, Some(1)));
        assert_eq!(layer.occupied_count(), 0);
    }

    #[test]
    fn test_last_cell_is_addressable() {
        let mut layer = TileLayer::new();
        assert!(layer.set(X_TILE_COUNT - 1, Y_TILE_COUNT - 1, Some(9)));
        assert_eq!(layer.iter_occupied().last(), Some((TILE_COUNT - 1, 9)));
    }

    #[test]
    fn test_iter_occupied_in_index_order() {
        let mut layer = TileLayer::new();
        layer.set(1, 1, Some(5));
        layer.set(0, 0, Some(7));
        let cells: Vec<_> = layer.iter_occupied().collect();
        assert_eq!(cells, vec![(0, 7), (X_TILE_COUNT as usize + 1, 5)]);
    }

    #[test]
    fn test_layers_paint_and_erase() {
        let mut layers = TileLayers::new();
        assert!(layers.paint(2, 10, 10, 1));
        assert!(layers.paint(0, 10, 10, 3));
        assert_eq!(layers.occupied_count(), 2);
        assert_eq!(layers.layer(2).and_then(|l| l.get(10, 10)), Some(1));

        assert!(layers.erase(2, 10, 10));
        assert_eq!(layers.occupied_count(), 1);

        assert!(!layers.paint(MAX_LAYERS, 0, 0, 1));
        assert!(!layers.erase(MAX_LAYERS, 0, 0));

    }
}
