//! Game action definitions
//!
//! Every action maps to exactly one keyboard key or mouse button.

use macroquad::input::{KeyCode, MouseButton};

/// All game/editor actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (player in play mode, camera pan in the editor)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Needs
    EatFood,
    Sleep,

    // Editor
    Paint,
    Erase,
    NextTile,
    PrevTile,
    SaveMap,
    LoadMap,
    ToggleCoords,

    // System
    ToggleMode,
    Exit,
}

/// Physical input an action is bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl Action {
    #[cfg(test)]
    pub const ALL: [Action; 15] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::EatFood,
        Action::Sleep,
        Action::Paint,
        Action::Erase,
        Action::NextTile,
        Action::PrevTile,
        Action::SaveMap,
        Action::LoadMap,
        Action::ToggleCoords,
        Action::ToggleMode,
        Action::Exit,
    ];

    pub fn binding(&self) -> Binding {
        match self {
            Action::MoveUp => Binding::Key(KeyCode::W),
            Action::MoveDown => Binding::Key(KeyCode::S),
            Action::MoveLeft => Binding::Key(KeyCode::A),
            Action::MoveRight => Binding::Key(KeyCode::D),

            Action::EatFood => Binding::Key(KeyCode::F),
            Action::Sleep => Binding::Key(KeyCode::R),

            Action::Paint => Binding::Mouse(MouseButton::Left),
            Action::Erase => Binding::Mouse(MouseButton::Right),
            Action::NextTile => Binding::Key(KeyCode::E),
            Action::PrevTile => Binding::Key(KeyCode::Q),
            Action::SaveMap => Binding::Key(KeyCode::F5),
            Action::LoadMap => Binding::Key(KeyCode::F9),
            Action::ToggleCoords => Binding::Key(KeyCode::C),

            Action::ToggleMode => Binding::Key(KeyCode::Tab),
            Action::Exit => Binding::Key(KeyCode::Escape),
        }
    }
}

/// Keys that select a tile layer in the editor, bottom layer first
pub const LAYER_KEYS: [KeyCode; 6] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
];
