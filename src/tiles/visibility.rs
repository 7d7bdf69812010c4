//! Tile Visibility
//!
//! Works out which tiles can intersect the viewport so the editor only
//! iterates those instead of the whole grid every frame.

use macroquad::math::{vec2, Mat4, Vec2};
use crate::view::screen_to_world;
use super::{world_origin, in_bounds, TILE_HEIGHT, TILE_WIDTH, WORLD_HEIGHT, WORLD_WIDTH, X_TILE_COUNT, Y_TILE_COUNT};

/// Inclusive range of tile coordinates.
///
/// Ranges straight out of [`visible_tile_range`] may reach past the grid at
/// the viewport edges; use [`TileRange::clamped`] before indexing a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    pub first_x: i32,
    pub first_y: i32,
    pub last_x: i32,
    pub last_y: i32,
}

impl TileRange {
    /// Covers no tiles
    pub const EMPTY: TileRange = TileRange { first_x: 0, first_y: 0, last_x: -1, last_y: -1 };

    /// Clamp into `[0, count)` on both axes. A range that misses the grid
    /// entirely comes back empty.
    pub fn clamped(self, x_count: i32, y_count: i32) -> Self {
        let misses = self.is_empty()
            || x_count <= 0
            || y_count <= 0
            || self.last_x < 0
            || self.last_y < 0
            || self.first_x > x_count - 1
            || self.first_y > y_count - 1;
        if misses {
            return Self::EMPTY;
        }
        Self {
            first_x: self.first_x.clamp(0, x_count - 1),
            first_y: self.first_y.clamp(0, y_count - 1),
            last_x: self.last_x.clamp(0, x_count - 1),
            last_y: self.last_y.clamp(0, y_count - 1),
        }
    }

    /// Clamp into the map grid
    pub fn clamped_to_map(self) -> Self {
        self.clamped(X_TILE_COUNT, Y_TILE_COUNT)
    }

    pub fn is_empty(&self) -> bool {
        self.first_x > self.last_x || self.first_y > self.last_y
    }

    /// Number of tiles covered
    #[cfg(test)]
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        ((self.last_x - self.first_x + 1) * (self.last_y - self.first_y + 1)) as usize
    }

    /// Iterate tile coordinates column by column
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> {
        let (first_y, last_y) = (self.first_y, self.last_y);
        (self.first_x..=self.last_x).flat_map(move |x| (first_y..=last_y).map(move |y| (x, y)))
    }
}

/// Compute the tile range covered by the viewport.
///
/// Both viewport corners are taken to world space, made relative to the
/// world origin, and scaled into tile space with
/// `(coordinate / world_dimension) * tile_count`, truncating toward zero.
/// The result is not clamped.
pub fn visible_tile_range(window: Vec2, projection: Mat4, view: Mat4) -> TileRange {
    let bottom_left = screen_to_world(vec2(0.0, 0.0), window, projection, view);
    let top_right = screen_to_world(window, window, projection, view);

    let origin = world_origin();
    let to_tile_x = |wx: f32| (((wx - origin.x) / WORLD_WIDTH) * X_TILE_COUNT as f32) as i32;
    let to_tile_y = |wy: f32| (((wy - origin.y) / WORLD_HEIGHT) * Y_TILE_COUNT as f32) as i32;

    TileRange {
        first_x: to_tile_x(bottom_left.x),
        first_y: to_tile_y(bottom_left.y),
        last_x: to_tile_x(top_right.x),
        last_y: to_tile_y(top_right.y),
    }
}

/// Tile under a world-space point, or `None` off the grid
pub fn tile_at_world(p: Vec2) -> Option<(i32, i32)> {
    let local = p - world_origin();
    let x = (local.x / TILE_WIDTH).floor() as i32;
    let y = (local.y / TILE_HEIGHT).floor() as i32;
    if in_bounds(x, y) {
        Some((x, y))
    } else {
        None
    }
}
