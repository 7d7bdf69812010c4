//! Game Runtime
//!
//! Play-mode state and its per-frame update: player movement, the camera
//! following the player, and the needs ticking down.

use macroquad::math::{vec2, Vec2};
use macroquad::rand;
use crate::config::GameConfig;
use crate::input::FrameInput;
use super::camera::FollowCamera;
use super::entity::{setup_player, setup_rock, EntityPool, EntityRef};
use super::stats::Stats;

/// Number of rocks scattered at startup
pub const ROCK_COUNT: usize = 10;

/// Half-extent of the square rocks are scattered in, centred on the origin
pub const ROCK_SCATTER: f32 = 10.0;

/// Everything that exists while playing
#[derive(Debug, Clone)]
pub struct GameState {
    pub pool: EntityPool,
    pub player: EntityRef,
    pub stats: Stats,
    pub camera: FollowCamera,
    /// World units per second per axis
    pub player_speed: f32,
}

impl GameState {
    /// Build the starting world. Rocks are created before the player so the
    /// player sits at a higher slot and draws on top of them.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        rand::srand(seed);

        let mut pool = EntityPool::new();
        for _ in 0..ROCK_COUNT {
            let rock = pool.create();
            if let Some(entity) = pool.get_mut(rock) {
                setup_rock(entity);
                entity.position = vec2(
                    rand::gen_range(-ROCK_SCATTER, ROCK_SCATTER),
                    rand::gen_range(-ROCK_SCATTER, ROCK_SCATTER),
                );
            }
        }

        let player = pool.create();
        if let Some(entity) = pool.get_mut(player) {
            setup_player(entity);
        }
        log::info!("Spawned {} entities (seed {})", pool.len_valid(), seed);

        Self {
            pool,
            player,
            stats: Stats::new(),
            camera: FollowCamera::new(Vec2::ZERO, config.camera_zoom, config.camera_rate),
            player_speed: config.player_speed,
        }
    }

    pub fn player_position(&self) -> Vec2 {
        self.pool
            .get(self.player)
            .map(|e| e.position)
            .unwrap_or(Vec2::ZERO)
    }

    /// Advance one frame
    pub fn update(&mut self, input: &FrameInput, delta_t: f32) {
        if let Some(player) = self.pool.get_mut(self.player) {
            player.position += input.move_axis * (self.player_speed * delta_t);
        }

        let target = self.player_position();
        self.camera.update(target, delta_t);

        self.stats.tick(delta_t);
        if input.eat_food {
            self.stats.eat_food();
            log::debug!("Ate food, hunger now {:.0}", self.stats.hunger);
        }
        if input.sleep {
            self.stats.sleep();
            log::debug!("Slept, energy now {:.0}", self.stats.energy);
        }
    }
}
