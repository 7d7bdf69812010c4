//! Tile Map
//!
//! Fixed-size tile grid shared by the editor and the game view.
//! The grid is centred on the world origin: tile (0, 0) sits at the
//! bottom-left corner `(-WORLD_WIDTH / 2, -WORLD_HEIGHT / 2)`.

pub mod layer;
pub mod map_file;
pub mod palette;
pub mod visibility;

pub use layer::{TileId, TileLayer, TileLayers};
pub use map_file::{load_tile_map, save_tile_map, MapError};
pub use palette::TilePalette;
pub use visibility::{tile_at_world, visible_tile_range, TileRange};

use macroquad::math::{vec2, Vec2};

/// Number of tile columns in the map
pub const X_TILE_COUNT: i32 = 128;
/// Number of tile rows in the map
pub const Y_TILE_COUNT: i32 = 128;

/// Tile width in world units
pub const TILE_WIDTH: f32 = 64.0;
/// Tile height in world units
pub const TILE_HEIGHT: f32 = 64.0;

/// Total addressable tiles per layer
pub const TILE_COUNT: usize = (X_TILE_COUNT * Y_TILE_COUNT) as usize;

pub const WORLD_WIDTH: f32 = X_TILE_COUNT as f32 * TILE_WIDTH;
pub const WORLD_HEIGHT: f32 = Y_TILE_COUNT as f32 * TILE_HEIGHT;

/// Number of paintable layers, composed bottom to top
pub const MAX_LAYERS: usize = 6;

/// World-space position of the bottom-left corner of tile (0, 0)
pub fn world_origin() -> Vec2 {
    vec2(-WORLD_WIDTH / 2.0, -WORLD_HEIGHT / 2.0)
}

/// Flat index of a tile. Unchecked: callers must keep `x`, `y` in range
/// or bounds-check the result before indexing a layer.
pub fn get_tile_index(x: i32, y: i32) -> i64 {
    y as i64 * X_TILE_COUNT as i64 + x as i64
}

/// Inverse of [`get_tile_index`] for in-range indices
#[allow(dead_code)]
pub fn tile_coords(index: usize) -> (i32, i32) {
    let x = (index % X_TILE_COUNT as usize) as i32;
    let y = (index / X_TILE_COUNT as usize) as i32;
    (x, y)
}

/// Tile index for a position given relative to the world origin.
/// Truncates toward zero like the visible-range math.
#[allow(dead_code)]
pub fn tile_index_from_pos(p: Vec2) -> i64 {
    let x = ((p.x / WORLD_WIDTH) * X_TILE_COUNT as f32) as i32;
    let y = ((p.y / WORLD_HEIGHT) * Y_TILE_COUNT as f32) as i32;
    get_tile_index(x, y)
}

/// Whether tile coordinates fall inside the grid
pub fn in_bounds(x: i32, y: i32) -> bool {
    (0..X_TILE_COUNT).contains(&x) && (0..Y_TILE_COUNT).contains(&y)
}

/// World-space bottom-left corner of a tile
pub fn tile_world_pos(x: i32, y: i32) -> Vec2 {
    world_origin() + vec2(x as f32 * TILE_WIDTH, y as f32 * TILE_HEIGHT)
}

/// Checkerboard variation: true when exactly one of x, y is odd
pub fn checker_variation(x: i32, y: i32) -> bool {
    (x.rem_euclid(2) == 0) != (y.rem_euclid(2) == 0)
}
