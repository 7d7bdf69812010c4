//! Application state and mode management
//!
//! Two modes, each with its own persistent state. Tab switches between
//! them; both stay alive in the background so the editor keeps its map
//! while the game is running and vice versa.

use macroquad::prelude::*;
use serde::{Deserialize, Serialize};
use crate::config::GameConfig;
use crate::editor::{draw_grid_view, EditorState};
use crate::game::{draw_entities, draw_stats_overlay, FpsCounter, GameState, OverlayFont, SpriteTable};
use crate::game::renderer::draw_overlay_text;
use crate::input::FrameInput;
use crate::tiles::TilePalette;
use crate::view::ViewTransform;

/// The available modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum AppMode {
    /// Tile map editor
    Editing,
    /// The game itself
    #[default]
    Playing,
}

impl AppMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            AppMode::Editing => AppMode::Playing,
            AppMode::Playing => AppMode::Editing,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppMode::Editing => "Editing",
            AppMode::Playing => "Playing",
        }
    }
}

/// Main application state containing both mode states
pub struct AppState {
    /// Currently active mode
    pub mode: AppMode,
    pub editor: EditorState,
    pub game: GameState,
    pub sprites: SpriteTable,
    pub fps: FpsCounter,
    pub font: Option<Font>,
    pub font_size: u16,
    pub clear_color: Color,
    /// Set once the player asks to quit
    pub exit_requested: bool,
}

impl AppState {
    pub fn new(
        config: &GameConfig,
        mode: AppMode,
        seed: u64,
        sprites: SpriteTable,
        palette: TilePalette,
        font: Option<Font>,
    ) -> Self {
        Self {
            mode,
            editor: EditorState::new(config, palette),
            game: GameState::new(config, seed),
            sprites,
            fps: FpsCounter::new(),
            font,
            font_size: config.font_size,
            clear_color: Color::from_hex(config.clear_color),
            exit_requested: false,
        }
    }

    /// Switch to a different mode
    pub fn set_mode(&mut self, mode: AppMode) {
        if mode != self.mode {
            log::info!("Mode: {} -> {}", self.mode.label(), mode.label());
            self.mode = mode;
        }
    }

    /// Run one frame of logic for the active mode
    pub fn update(&mut self, input: &FrameInput, delta_t: f32, window: Vec2) {
        self.fps.tick(delta_t as f64);

        if input.exit {
            self.exit_requested = true;
        }
        if input.toggle_mode {
            self.set_mode(self.mode.toggled());
        }

        match self.mode {
            AppMode::Editing => self.editor.update(input, delta_t, window),
            AppMode::Playing => self.game.update(input, delta_t),
        }
    }

    fn overlay_font(&self) -> OverlayFont<'_> {
        OverlayFont { font: self.font.as_ref(), size: self.font_size }
    }

    /// Draw the active mode, then the shared overlay
    pub fn draw(&self, window: Vec2) {
        clear_background(self.clear_color);
        let font = self.overlay_font();

        match self.mode {
            AppMode::Editing => draw_grid_view(&self.editor, window, font),
            AppMode::Playing => {
                let camera = &self.game.camera;
                let view = ViewTransform::new(window, camera.position, camera.zoom);
                draw_entities(&self.game.pool, &self.sprites, &view);
                draw_stats_overlay(&self.game.stats, font);
            }
        }

        let label = self.fps.label();
        draw_overlay_text(&label, window.x - 100.0, 12.0 + font.size as f32, font, WHITE);
    }
}
