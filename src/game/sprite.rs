//! Sprite Table
//!
//! Static lookup from [`SpriteId`] to an image and its world-space size.
//! Lookups never fail: anything unknown resolves to the nil sprite.

use macroquad::math::Vec2;
use macroquad::texture::Texture2D;

/// Identifies an entry in the [`SpriteTable`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpriteId {
    /// Draws nothing
    #[default]
    Nil,
    Player,
    Rock,
    Tree,
}

impl SpriteId {
    pub const COUNT: usize = 4;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// An image plus the size it is drawn at, in world units
#[derive(Debug, Clone, Default)]
pub struct Sprite {
    pub image: Option<Texture2D>,
    pub size: Vec2,
}

/// All sprites, indexed by [`SpriteId`]
#[derive(Debug, Clone)]
pub struct SpriteTable {
    sprites: Vec<Sprite>,
}

impl SpriteTable {
    /// Every slot starts as an empty nil sprite
    pub fn new() -> Self {
        Self {
            sprites: vec![Sprite::default(); SpriteId::COUNT],
        }
    }

    pub fn set(&mut self, id: SpriteId, sprite: Sprite) {
        self.sprites[id.index()] = sprite;
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        self.get_by_index(id.index())
    }

    /// Look up by raw index, falling back to the nil sprite when out of range
    pub fn get_by_index(&self, index: usize) -> &Sprite {
        self.sprites
            .get(index)
            .unwrap_or(&self.sprites[SpriteId::Nil.index()])
    }
}

impl Default for SpriteTable {
    fn default() -> Self {
        Self::new()
    }
}
