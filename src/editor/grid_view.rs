//! 2D Grid View - Top-down tile map editing
//!
//! Draw order: checkerboard grid, tile layers bottom to top, hover
//! highlight, then the editor GUI. Only tiles inside the visible range
//! are touched.

use macroquad::prelude::*;
use crate::game::renderer::{draw_overlay_text, OverlayFont};
use crate::tiles::{
    checker_variation, tile_world_pos, visible_tile_range, TileLayer, TilePalette, TileRange,
    MAX_LAYERS, TILE_HEIGHT, TILE_WIDTH,
};
use crate::view::{DrawRect, ViewTransform};
use super::EditorState;

/// Checkerboard colors
pub const GRID_COLOR_A: Color = Color::new(0.30, 0.30, 0.30, 1.0);
pub const GRID_COLOR_B: Color = Color::new(0.27, 0.27, 0.27, 1.0);
/// Darkens the tile under the cursor
pub const HOVER_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.3);
/// Coordinate label color
pub const LABEL_COLOR: Color = Color::new(0.75, 0.75, 0.75, 1.0);

/// Checkerboard color for a tile
pub fn grid_color(x: i32, y: i32) -> Color {
    if checker_variation(x, y) { GRID_COLOR_B } else { GRID_COLOR_A }
}

/// Screen rectangle of a tile
pub fn tile_rect(view: &ViewTransform, x: i32, y: i32) -> DrawRect {
    view.world_rect(tile_world_pos(x, y), vec2(TILE_WIDTH, TILE_HEIGHT))
}

/// Visible tiles, clamped to the grid
pub fn visible_tiles(view: &ViewTransform) -> TileRange {
    visible_tile_range(view.window, view.projection, view.view).clamped_to_map()
}

/// Coordinate label for a tile
pub fn tile_label(x: i32, y: i32) -> String {
    format!("({}, {})", x, y)
}

/// Draw position (text baseline, top-left pixel space) of a tile's label:
/// inset from the left edge, a little below the middle
pub fn tile_label_pos(view: &ViewTransform, x: i32, y: i32) -> Vec2 {
    let world = tile_world_pos(x, y) + vec2(5.0, TILE_HEIGHT * 0.5 - 10.0);
    view.to_draw(view.world_to_screen(world))
}

/// Draw the whole editor view for this frame
pub fn draw_grid_view(state: &EditorState, window: Vec2, font: OverlayFont) {
    let view = state.view(window);
    let range = visible_tiles(&view);

    if !range.is_empty() {
        for (x, y) in range.iter() {
            let r = tile_rect(&view, x, y);
            draw_rectangle(r.x, r.y, r.w, r.h, grid_color(x, y));
        }

        for layer in state.layers.iter() {
            draw_layer(layer, &state.palette, &view, range);
        }

        if state.show_coords {
            for (x, y) in range.iter() {
                let pos = tile_label_pos(&view, x, y);
                draw_overlay_text(&tile_label(x, y), pos.x, pos.y, font, LABEL_COLOR);
            }
        }
    }

    if let Some((x, y)) = state.hovered_tile {
        let r = tile_rect(&view, x, y);
        draw_rectangle(r.x, r.y, r.w, r.h, HOVER_COLOR);
    }

    draw_editor_gui(state, font);
}

fn draw_layer(layer: &TileLayer, palette: &TilePalette, view: &ViewTransform, range: TileRange) {
    for (x, y) in range.iter() {
        let Some(tile) = layer.get(x, y) else { continue };
        let r = tile_rect(view, x, y);
        match palette.get(tile).and_then(|entry| entry.image.as_ref()) {
            Some(texture) => draw_texture_ex(
                texture,
                r.x,
                r.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(r.w, r.h)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(r.x, r.y, r.w, r.h, palette.color_for(tile)),
        }
    }
}

/// Text for the editor info line
pub fn editor_info(state: &EditorState) -> String {
    let brush = state
        .palette
        .get(state.brush)
        .map(|entry| entry.name.as_str())
        .unwrap_or("-");
    let hover = match state.hovered_tile {
        Some((x, y)) => format!("({}, {})", x, y),
        None => "-".to_string(),
    };
    format!(
        "Layer {}/{} | Tile: {} | Hover: {}",
        state.current_layer + 1,
        MAX_LAYERS,
        brush,
        hover
    )
}

fn draw_editor_gui(state: &EditorState, font: OverlayFont) {
    let line_height = font.size as f32 * 1.25;
    draw_overlay_text(&editor_info(state), 12.0, 12.0 + line_height, font, WHITE);

    // Brush swatch
    let swatch = 24.0;
    let swatch_y = 12.0 + line_height * 1.5;
    draw_rectangle(12.0, swatch_y, swatch, swatch, state.palette.color_for(state.brush));
    if let Some(texture) = state.palette.get(state.brush).and_then(|entry| entry.image.as_ref()) {
        draw_texture_ex(
            texture,
            12.0,
            swatch_y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(swatch, swatch)),
                ..Default::default()
            },
        );
    }
    draw_rectangle_lines(12.0, swatch_y, swatch, swatch, 1.0, WHITE);

    let bottom = screen_height() - 12.0;
    if let Some(status) = state.get_status() {
        draw_overlay_text(status, 12.0, bottom - line_height, font, YELLOW);
    }
    draw_overlay_text(
        "WASD: Pan | LMB: Paint | RMB: Erase | 1-6: Layer | Q/E: Tile | C: Coords | F5: Save | F9: Load | Tab: Play",
        12.0,
        bottom,
        font,
        Color::from_rgba(180, 180, 190, 200),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::tiles::palette::PaletteEntry;
    use crate::tiles::{X_TILE_COUNT, Y_TILE_COUNT};

    fn editor() -> EditorState {
        let mut palette = TilePalette::new();
        palette.push(PaletteEntry { name: "grass".into(), image: None, color: GREEN });
        EditorState::new(&GameConfig::default(), palette)
    }

    #[test]
    fn test_checkerboard_alternates() {
        assert_eq!(grid_color(0, 0), GRID_COLOR_A);
        assert_eq!(grid_color(1, 0), GRID_COLOR_B);
        assert_eq!(grid_color(0, 1), GRID_COLOR_B);
        assert_eq!(grid_color(1, 1), GRID_COLOR_A);
    }

    #[test]
    fn test_tile_rect_at_origin() {
        // Tile (64, 64) has its bottom-left corner at the world origin
        let view = ViewTransform::new(vec2(640.0, 480.0), Vec2::ZERO, 1.0);
        let r = tile_rect(&view, 64, 64);
        assert!((r.x - 320.0).abs() < 0.001);
        assert!((r.y - (240.0 - TILE_HEIGHT)).abs() < 0.001);
        assert!((r.w - TILE_WIDTH).abs() < 0.001);
        assert!((r.h - TILE_HEIGHT).abs() < 0.001);
    }

    #[test]
    fn test_visible_tiles_stay_on_grid() {
        // Straddling the bottom-left corner of the map
        let view = ViewTransform::new(vec2(640.0, 480.0), vec2(-4096.0, -4096.0), 1.0);
        let range = visible_tiles(&view);
        assert!(!range.is_empty());
        assert_eq!((range.first_x, range.first_y), (0, 0));
        assert!(range.last_x < X_TILE_COUNT && range.last_y < Y_TILE_COUNT);

        // Camera parked past the corner sees nothing
        let view = ViewTransform::new(vec2(640.0, 480.0), vec2(-5000.0, -5000.0), 1.0);
        assert!(visible_tiles(&view).is_empty());
    }

    #[test]
    fn test_tile_label() {
        assert_eq!(tile_label(3, 17), "(3, 17)");
        assert_eq!(tile_label(0, 127), "(0, 127)");
    }

    #[test]
    fn test_tile_label_pos() {
        // Tile (64, 64) starts at the world origin, which is the window centre
        let view = ViewTransform::new(vec2(640.0, 480.0), Vec2::ZERO, 1.0);
        let pos = tile_label_pos(&view, 64, 64);
        assert!((pos.x - 325.0).abs() < 0.001);
        assert!((pos.y - (240.0 - (TILE_HEIGHT * 0.5 - 10.0))).abs() < 0.001);
    }

    #[test]
    fn test_editor_info() {
        let mut state = editor();
        assert_eq!(editor_info(&state), "Layer 1/6 | Tile: grass | Hover: -");
        state.current_layer = 3;
        state.hovered_tile = Some((7, 9));
        assert_eq!(editor_info(&state), "Layer 4/6 | Tile: grass | Hover: (7, 9)");
    }
}
