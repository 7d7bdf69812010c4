//! Tile Map Editor
//!
//! Checkerboard grid view with up to six paintable tile layers, a hover
//! highlight, and save/load of the map to RON.

mod state;
mod grid_view;

pub use state::*;
pub use grid_view::*;
