//! Editor state and data

use std::path::PathBuf;
use macroquad::math::Vec2;
use crate::config::GameConfig;
use crate::input::FrameInput;
use crate::tiles::{
    load_tile_map, save_tile_map, tile_at_world, MapError, TileId, TileLayers, TilePalette,
    MAX_LAYERS,
};
use crate::view::ViewTransform;

/// How long status messages stay on screen (seconds)
pub const STATUS_DURATION: f64 = 3.0;

/// Tile map editor state
pub struct EditorState {
    /// Editor camera position (world units)
    pub camera_position: Vec2,
    pub zoom: f32,
    /// Camera pan speed (world units per second)
    pub pan_speed: f32,

    /// The map being edited
    pub layers: TileLayers,
    /// Tiles that can be painted
    pub palette: TilePalette,
    /// Layer that paint and erase act on
    pub current_layer: usize,
    /// Tile painted with the left mouse button
    pub brush: TileId,
    /// Tile under the mouse cursor this frame
    pub hovered_tile: Option<(i32, i32)>,
    /// Label every visible tile with its coordinates
    pub show_coords: bool,

    /// Where F5/F9 save and load
    pub map_path: PathBuf,

    /// Status message (shown at the bottom of the screen)
    pub status_message: Option<(String, f64)>, // (message, expiry_time)

    /// Seconds of editor time elapsed, used for status expiry
    clock: f64,
}

impl EditorState {
    pub fn new(config: &GameConfig, palette: TilePalette) -> Self {
        Self {
            camera_position: Vec2::ZERO,
            zoom: config.camera_zoom,
            pan_speed: config.editor_pan_speed,
            layers: TileLayers::new(),
            palette,
            current_layer: 0,
            brush: 0,
            hovered_tile: None,
            show_coords: false,
            map_path: PathBuf::from(&config.map_path),
            status_message: None,
            clock: 0.0,
        }
    }

    /// Camera transform for the given window size
    pub fn view(&self, window: Vec2) -> ViewTransform {
        ViewTransform::new(window, self.camera_position, self.zoom)
    }

    /// Advance one frame: pan, pick layer and brush, then paint or erase
    /// under the cursor
    pub fn update(&mut self, input: &FrameInput, delta_t: f32, window: Vec2) {
        self.clock += delta_t as f64;

        self.camera_position += input.move_axis * (self.pan_speed * delta_t);

        if let Some(layer) = input.select_layer {
            if layer < MAX_LAYERS {
                self.current_layer = layer;
            }
        }
        if input.toggle_coords {
            self.show_coords = !self.show_coords;
        }
        if input.tile_step > 0 {
            self.brush = self.palette.next_id(self.brush);
        } else if input.tile_step < 0 {
            self.brush = self.palette.prev_id(self.brush);
        }

        let view = self.view(window);
        self.hovered_tile = tile_at_world(view.screen_to_world(input.mouse));

        if let Some((x, y)) = self.hovered_tile {
            if input.paint && !self.palette.is_empty() {
                self.layers.paint(self.current_layer, x, y, self.brush);
            } else if input.erase {
                self.layers.erase(self.current_layer, x, y);
            }
        }

        if input.save_map {
            match self.save_map() {
                Ok(()) => self.set_status(&format!("Saved {}", self.map_path.display())),
                Err(e) => {
                    log::warn!("Failed to save map to {}: {}", self.map_path.display(), e);
                    self.set_status(&format!("Save failed: {}", e));
                }
            }
        }
        if input.load_map {
            match self.load_map() {
                Ok(()) => self.set_status(&format!("Loaded {}", self.map_path.display())),
                Err(e) => {
                    log::warn!("Failed to load map from {}: {}", self.map_path.display(), e);
                    self.set_status(&format!("Load failed: {}", e));
                }
            }
        }
    }

    /// Write the layers to `map_path`
    pub fn save_map(&self) -> Result<(), MapError> {
        save_tile_map(&self.layers, &self.map_path)?;
        log::info!(
            "Saved {} tiles to {}",
            self.layers.occupied_count(),
            self.map_path.display()
        );
        Ok(())
    }

    /// Replace the layers with the contents of `map_path`. On error the
    /// current layers are left untouched.
    pub fn load_map(&mut self) -> Result<(), MapError> {
        self.layers = load_tile_map(&self.map_path)?;
        log::info!(
            "Loaded {} tiles from {}",
            self.layers.occupied_count(),
            self.map_path.display()
        );
        Ok(())
    }

    /// Set a status message that will be displayed for a while
    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some((message.to_string(), self.clock + STATUS_DURATION));
    }

    /// Get current status message if not expired
    pub fn get_status(&self) -> Option<&str> {
        if let Some((msg, expiry)) = &self.status_message {
            if self.clock < *expiry {
                return Some(msg);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::Color;
    use macroquad::math::vec2;
    use crate::tiles::palette::PaletteEntry;
    use tempfile::TempDir;

    const WINDOW: Vec2 = Vec2::new(1280.0, 720.0);

    fn palette() -> TilePalette {
        let mut palette = TilePalette::new();
        for name in ["grass", "dirt", "water"] {
            palette.push(PaletteEntry { name: name.to_string(), image: None, color: Color::new(0.5, 0.5, 0.5, 1.0) });
        }
        palette
    }

    fn editor() -> EditorState {
        EditorState::new(&GameConfig::default(), palette())
    }

    fn center_mouse() -> FrameInput {
        FrameInput { mouse: WINDOW * 0.5, ..Default::default() }
    }

    #[test]
    fn test_pan_speed() {
        let mut state = editor();
        let input = FrameInput { move_axis: vec2(1.0, 1.0), ..Default::default() };
        state.update(&input, 0.5, WINDOW);
        assert_eq!(state.camera_position, vec2(200.0, 200.0));
    }

    #[test]
    fn test_hover_tracks_cursor() {
        let mut state = editor();
        state.update(&center_mouse(), 0.0, WINDOW);
        // Screen centre is the world origin, the corner of tile (64, 64)
        assert_eq!(state.hovered_tile, Some((64, 64)));

        // Far outside the grid
        state.camera_position = vec2(100_000.0, 0.0);
        state.update(&center_mouse(), 0.0, WINDOW);
        assert_eq!(state.hovered_tile, None);
    }

    #[test]
    fn test_paint_and_erase_on_current_layer() {
        let mut state = editor();
        let select = FrameInput { select_layer: Some(2), tile_step: 1, ..center_mouse() };
        state.update(&select, 0.0, WINDOW);
        assert_eq!(state.current_layer, 2);
        assert_eq!(state.brush, 1);

        state.update(&FrameInput { paint: true, ..center_mouse() }, 0.0, WINDOW);
        assert_eq!(state.layers.layer(2).unwrap().get(64, 64), Some(1));
        assert_eq!(state.layers.layer(0).unwrap().get(64, 64), None);

        state.update(&FrameInput { erase: true, ..center_mouse() }, 0.0, WINDOW);
        assert_eq!(state.layers.layer(2).unwrap().get(64, 64), None);
    }

    #[test]
    fn test_toggle_coordinate_labels() {
        let mut state = editor();
        assert!(!state.show_coords);
        state.update(&FrameInput { toggle_coords: true, ..Default::default() }, 0.0, WINDOW);
        assert!(state.show_coords);
        state.update(&FrameInput::default(), 0.0, WINDOW);
        assert!(state.show_coords);
        state.update(&FrameInput { toggle_coords: true, ..Default::default() }, 0.0, WINDOW);
        assert!(!state.show_coords);
    }

    #[test]
    fn test_brush_wraps() {
        let mut state = editor();
        state.update(&FrameInput { tile_step: -1, ..Default::default() }, 0.0, WINDOW);
        assert_eq!(state.brush, 2);
        state.update(&FrameInput { tile_step: 1, ..Default::default() }, 0.0, WINDOW);
        assert_eq!(state.brush, 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut state = editor();
        state.map_path = dir.path().join("map.ron");

        state.layers.paint(1, 10, 20, 2);
        state.update(&FrameInput { save_map: true, ..Default::default() }, 0.0, WINDOW);
        assert!(state.get_status().unwrap().starts_with("Saved"));

        state.layers = TileLayers::new();
        state.update(&FrameInput { load_map: true, ..Default::default() }, 0.0, WINDOW);
        assert_eq!(state.layers.layer(1).unwrap().get(10, 20), Some(2));
    }

    #[test]
    fn test_failed_load_keeps_layers() {
        let dir = TempDir::new().unwrap();
        let mut state = editor();
        state.map_path = dir.path().join("missing.ron");
        state.layers.paint(0, 1, 1, 0);

        state.update(&FrameInput { load_map: true, ..Default::default() }, 0.0, WINDOW);
        assert!(state.get_status().unwrap().starts_with("Load failed"));
        assert_eq!(state.layers.layer(0).unwrap().get(1, 1), Some(0));
    }

    #[test]
    fn test_status_expires() {
        let mut state = editor();
        state.set_status("hello");
        assert_eq!(state.get_status(), Some("hello"));
        state.update(&FrameInput::default(), STATUS_DURATION as f32 + 0.1, WINDOW);
        assert_eq!(state.get_status(), None);
    }
}
