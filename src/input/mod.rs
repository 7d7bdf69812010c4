//! Input handling
//!
//! An action-based layer over macroquad's keyboard and mouse polling.
//! Actions are bound to physical inputs in [`Action::binding`], and each
//! frame's state is captured into a [`FrameInput`] snapshot.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
