//! Game Renderer
//!
//! Draws play mode: every valid entity in slot order, then the needs
//! overlay. All positions go through [`ViewTransform`] so the same camera
//! math drives both drawing and the editor's picking.

use macroquad::prelude::*;
use crate::view::{DrawRect, ViewTransform};
use crate::tiles::palette::MISSING_TILE_COLOR;
use super::entity::{Entity, EntityPool};
use super::sprite::{Sprite, SpriteId, SpriteTable};
use super::stats::{Need, Stats};

/// Overlay text color
pub const OVERLAY_TEXT_COLOR: Color = WHITE;

/// Font settings for overlay text
#[derive(Clone, Copy)]
pub struct OverlayFont<'a> {
    pub font: Option<&'a Font>,
    pub size: u16,
}

/// Where an entity's sprite lands on screen. The entity position is the
/// bottom-centre of the sprite.
pub fn entity_draw_rect(entity: &Entity, sprite: &Sprite, view: &ViewTransform) -> DrawRect {
    let min = entity.position - vec2(sprite.size.x * 0.5, 0.0);
    view.world_rect(min, sprite.size)
}

/// Draw all valid entities. Later slots draw over earlier ones.
pub fn draw_entities(pool: &EntityPool, sprites: &SpriteTable, view: &ViewTransform) {
    for (_, entity) in pool.iter_valid() {
        if entity.sprite == SpriteId::Nil {
            continue;
        }
        let sprite = sprites.get(entity.sprite);
        let rect = entity_draw_rect(entity, sprite, view);
        match &sprite.image {
            Some(texture) => draw_texture_ex(
                texture,
                rect.x,
                rect.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(rect.w, rect.h)),
                    ..Default::default()
                },
            ),
            None => draw_rectangle(rect.x, rect.y, rect.w, rect.h, MISSING_TILE_COLOR),
        }
    }
}

/// Overlay lines for the needs panel
pub fn stats_lines(stats: &Stats) -> Vec<String> {
    Need::ALL
        .iter()
        .map(|&need| format!("{:<8} {:>3.0}", need.label(), stats.get(need)))
        .collect()
}

/// Draw text in macroquad screen space with the overlay font
pub fn draw_overlay_text(text: &str, x: f32, y: f32, font: OverlayFont, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font: font.font,
            font_size: font.size,
            color,
            ..Default::default()
        },
    );
}

/// Needs panel in the top-left corner, plus a controls hint at the bottom
pub fn draw_stats_overlay(stats: &Stats, font: OverlayFont) {
    let line_height = font.size as f32 * 1.25;
    let mut y = 12.0 + line_height;
    for line in stats_lines(stats) {
        draw_overlay_text(&line, 12.0, y, font, OVERLAY_TEXT_COLOR);
        y += line_height;
    }

    draw_overlay_text(
        "WASD: Move | F: Eat | R: Sleep | Tab: Editor | Esc: Quit",
        12.0,
        screen_height() - 12.0,
        font,
        Color::from_rgba(180, 180, 190, 200),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entity::Entity;

    #[test]
    fn test_entity_rect_is_bottom_centre_anchored() {
        let view = ViewTransform::new(vec2(200.0, 100.0), Vec2::ZERO, 1.0);
        let sprite = Sprite { image: None, size: vec2(16.0, 16.0) };
        let entity = Entity { valid: true, ..Default::default() };

        let rect = entity_draw_rect(&entity, &sprite, &view);
        assert!((rect.x - 92.0).abs() < 0.001);
        assert!((rect.y - 34.0).abs() < 0.001);
        assert!((rect.w - 16.0).abs() < 0.001);
        assert!((rect.h - 16.0).abs() < 0.001);
    }

    #[test]
    fn test_entity_rect_follows_camera() {
        let view = ViewTransform::new(vec2(200.0, 100.0), vec2(10.0, 0.0), 1.0);
        let sprite = Sprite { image: None, size: vec2(16.0, 16.0) };
        let entity = Entity { valid: true, ..Default::default() };

        // Camera moved right, so the entity shifts left on screen
        let rect = entity_draw_rect(&entity, &sprite, &view);
        assert!((rect.x - 82.0).abs() < 0.001);
    }

    #[test]
    fn test_stats_lines() {
        let mut stats = Stats::new();
        stats.tick(10.0);
        let lines = stats_lines(&stats);
        assert_eq!(lines.len(), Need::ALL.len());
        assert!(lines[0].starts_with(Need::Hunger.label()));
        assert!(lines[0].ends_with(" 90"));
        assert!(lines[1].ends_with(" 80"));
    }
}
