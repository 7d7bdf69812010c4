//! Game Module
//!
//! Play mode for Willowbrook: a fixed pool of entities, a sprite table,
//! the player's needs, and a camera that eases after the player.
//!
//! Key concepts:
//! - Entity: a slot in a fixed-size pool, identified by its index
//! - Sprite: image plus draw size, looked up by `SpriteId`
//! - Stats: bounded needs that drain over time
//! - FollowCamera: exponential smoothing toward a target

pub mod entity;
pub mod sprite;
pub mod stats;
pub mod camera;
pub mod fps;
pub mod runtime;
pub mod renderer;

pub use sprite::{Sprite, SpriteId, SpriteTable};
pub use fps::FpsCounter;
pub use runtime::GameState;
pub use renderer::{draw_entities, draw_stats_overlay, OverlayFont};
