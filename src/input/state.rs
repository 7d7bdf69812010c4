//! Input state
//!
//! The game never asks macroquad about keys directly. Once per frame
//! [`FrameInput::poll`] takes a snapshot, and the update code reads only
//! that, which keeps update logic testable without a window.

use macroquad::prelude::*;
use crate::view::flip_y;
use super::{Action, Binding, LAYER_KEYS};

/// Everything the game needs from the input devices for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// WASD axis, each component in {-1, 0, 1}
    pub move_axis: Vec2,
    /// Mouse position in screen space (bottom-left origin, y up)
    pub mouse: Vec2,

    // Edge-triggered (true only on the frame of the press)
    pub exit: bool,
    pub toggle_mode: bool,
    pub eat_food: bool,
    pub sleep: bool,
    pub save_map: bool,
    pub load_map: bool,
    pub toggle_coords: bool,
    /// -1, 0 or 1 from the tile cycling keys
    pub tile_step: i32,
    /// Layer picked with the number keys this frame
    pub select_layer: Option<usize>,

    // Level-triggered
    pub paint: bool,
    pub erase: bool,
}

impl FrameInput {
    /// Read the current keyboard and mouse state from macroquad
    pub fn poll() -> Self {
        let (mouse_x, mouse_y) = mouse_position();
        let window = vec2(screen_width(), screen_height());

        Self {
            move_axis: move_axis(
                action_down(Action::MoveUp),
                action_down(Action::MoveDown),
                action_down(Action::MoveLeft),
                action_down(Action::MoveRight),
            ),
            mouse: flip_y(vec2(mouse_x, mouse_y), window),
            exit: action_pressed(Action::Exit),
            toggle_mode: action_pressed(Action::ToggleMode),
            eat_food: action_pressed(Action::EatFood),
            sleep: action_pressed(Action::Sleep),
            save_map: action_pressed(Action::SaveMap),
            load_map: action_pressed(Action::LoadMap),
            toggle_coords: action_pressed(Action::ToggleCoords),
            tile_step: action_pressed(Action::NextTile) as i32 - action_pressed(Action::PrevTile) as i32,
            select_layer: LAYER_KEYS.iter().position(|&key| is_key_pressed(key)),
            paint: action_down(Action::Paint),
            erase: action_down(Action::Erase),
        }
    }
}

/// Check if action is currently held down
pub fn action_down(action: Action) -> bool {
    match action.binding() {
        Binding::Key(key) => is_key_down(key),
        Binding::Mouse(button) => is_mouse_button_down(button),
    }
}

/// Check if action was just pressed this frame
pub fn action_pressed(action: Action) -> bool {
    match action.binding() {
        Binding::Key(key) => is_key_pressed(key),
        Binding::Mouse(button) => is_mouse_button_pressed(button),
    }
}

/// Combine four direction keys into an axis. Opposite keys cancel out;
/// diagonals are left unnormalised.
pub fn move_axis(up: bool, down: bool, left: bool, right: bool) -> Vec2 {
    let mut result = Vec2::ZERO;
    if up { result.y += 1.0; }
    if down { result.y -= 1.0; }
    if left { result.x -= 1.0; }
    if right { result.x += 1.0; }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_axis_single_keys() {
        assert_eq!(move_axis(true, false, false, false), vec2(0.0, 1.0));
        assert_eq!(move_axis(false, true, false, false), vec2(0.0, -1.0));
        assert_eq!(move_axis(false, false, true, false), vec2(-1.0, 0.0));
        assert_eq!(move_axis(false, false, false, true), vec2(1.0, 0.0));
    }

    #[test]
    fn test_move_axis_opposites_cancel() {
        assert_eq!(move_axis(true, true, true, true), Vec2::ZERO);
    }

    #[test]
    fn test_move_axis_diagonal_unnormalised() {
        assert_eq!(move_axis(true, false, false, true), vec2(1.0, 1.0));
    }

    #[test]
    fn test_default_is_idle() {
        let input = FrameInput::default();
        assert_eq!(input.move_axis, Vec2::ZERO);
        assert!(!input.exit && !input.paint && input.select_layer.is_none());
    }
}
