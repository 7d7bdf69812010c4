//! Entity Pool
//!
//! Entities live in a fixed array of slots. Creating one scans for the
//! first free slot; destroying one resets its slot so a later scan can
//! hand it out again. Identity is the slot index, and iteration runs in
//! slot order, so among entities at the same position the later-created
//! one (at a higher slot) draws on top.

use macroquad::math::Vec2;
use super::sprite::SpriteId;

/// Number of entity slots
pub const MAX_ENTITY_COUNT: usize = 1024;

/// What kind of object an entity is; decides setup and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Archetype {
    #[default]
    None,
    Player,
    #[allow(dead_code)]
    Tree,
    Rock,
}

/// One game object. A slot with `valid == false` holds only defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Entity {
    pub valid: bool,
    pub archetype: Archetype,
    /// World-space position (bottom-centre of the sprite)
    pub position: Vec2,
    /// `SpriteId::Nil` for entities that are not drawn
    pub sprite: SpriteId,
}

/// Reference to an entity slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef(u32);

impl EntityRef {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Every slot is taken
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No more free entities! (pool capacity {capacity})")]
pub struct PoolExhausted {
    pub capacity: usize,
}

/// Fixed-capacity entity storage
#[derive(Debug, Clone)]
pub struct EntityPool {
    slots: Vec<Entity>,
}

impl EntityPool {
    pub fn new() -> Self {
        Self {
            slots: vec![Entity::default(); MAX_ENTITY_COUNT],
        }
    }

    /// Claim the lowest free slot
    pub fn try_create(&mut self) -> Result<EntityRef, PoolExhausted> {
        let index = self
            .slots
            .iter()
            .position(|e| !e.valid)
            .ok_or(PoolExhausted { capacity: MAX_ENTITY_COUNT })?;

        self.slots[index].valid = true;
        Ok(EntityRef(index as u32))
    }

    /// Claim the lowest free slot.
    ///
    /// # Panics
    /// When the pool is full. Running out of slots means the capacity is
    /// wrong for the game, which is not something to recover from.
    pub fn create(&mut self) -> EntityRef {
        match self.try_create() {
            Ok(entity) => entity,
            Err(e) => panic!("{}", e),
        }
    }

    /// Reset the slot to its default (free) state. Destroying a free slot
    /// does nothing.
    #[allow(dead_code)]
    pub fn destroy(&mut self, entity: EntityRef) {
        if let Some(slot) = self.slots.get_mut(entity.index()) {
            *slot = Entity::default();
        }
    }

    pub fn get(&self, entity: EntityRef) -> Option<&Entity> {
        self.slots.get(entity.index()).filter(|e| e.valid)
    }

    pub fn get_mut(&mut self, entity: EntityRef) -> Option<&mut Entity> {
        self.slots.get_mut(entity.index()).filter(|e| e.valid)
    }

    /// Valid entities in ascending slot order
    pub fn iter_valid(&self) -> impl Iterator<Item = (EntityRef, &Entity)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, e)| e.valid)
            .map(|(idx, e)| (EntityRef(idx as u32), e))
    }

    /// Number of valid entities
    pub fn len_valid(&self) -> usize {
        self.slots.iter().filter(|e| e.valid).count()
    }
}

impl Default for EntityPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Turn a fresh entity into a rock
pub fn setup_rock(entity: &mut Entity) {
    entity.archetype = Archetype::Rock;
    entity.sprite = SpriteId::Rock;
}

/// Turn a fresh entity into the player
pub fn setup_player(entity: &mut Entity) {
    entity.archetype = Archetype::Player;
    entity.sprite = SpriteId::Player;
}
