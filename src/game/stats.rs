//! Player Needs
//!
//! Six bounded counters in `[0, 100]`. Five of them drain linearly over
//! time; `fun` is tracked but nothing drains or fills it yet.
//! Needs do not affect each other.

use serde::{Deserialize, Serialize};

pub const STAT_MIN: f32 = 0.0;
pub const STAT_MAX: f32 = 100.0;

/// Hunger restored by [`Stats::eat_food`]
pub const FOOD_AMOUNT: f32 = 25.0;
/// Energy restored by [`Stats::sleep`]
pub const SLEEP_AMOUNT: f32 = 50.0;

/// One player need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Need {
    Hunger,
    Energy,
    Hygiene,
    Social,
    Fun,
    Bladder,
}

impl Need {
    pub const ALL: [Need; 6] = [
        Need::Hunger,
        Need::Energy,
        Need::Hygiene,
        Need::Social,
        Need::Fun,
        Need::Bladder,
    ];

    /// Display label for the overlay
    pub fn label(&self) -> &'static str {
        match self {
            Need::Hunger => "Hunger",
            Need::Energy => "Energy",
            Need::Hygiene => "Hygiene",
            Need::Social => "Social",
            Need::Fun => "Fun",
            Need::Bladder => "Bladder",
        }
    }

    /// Points lost per second
    pub fn decay_rate(&self) -> f32 {
        match self {
            Need::Energy => 2.0,
            Need::Hunger | Need::Hygiene | Need::Social | Need::Bladder => 1.0,
            Need::Fun => 0.0,
        }
    }
}

/// The player's needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub hunger: f32,
    pub energy: f32,
    pub hygiene: f32,
    pub social: f32,
    pub fun: f32,
    pub bladder: f32,
}

impl Stats {
    /// All needs start full
    pub fn new() -> Self {
        Self {
            hunger: STAT_MAX,
            energy: STAT_MAX,
            hygiene: STAT_MAX,
            social: STAT_MAX,
            fun: STAT_MAX,
            bladder: STAT_MAX,
        }
    }

    pub fn get(&self, need: Need) -> f32 {
        match need {
            Need::Hunger => self.hunger,
            Need::Energy => self.energy,
            Need::Hygiene => self.hygiene,
            Need::Social => self.social,
            Need::Fun => self.fun,
            Need::Bladder => self.bladder,
        }
    }

    fn get_mut(&mut self, need: Need) -> &mut f32 {
        match need {
            Need::Hunger => &mut self.hunger,
            Need::Energy => &mut self.energy,
            Need::Hygiene => &mut self.hygiene,
            Need::Social => &mut self.social,
            Need::Fun => &mut self.fun,
            Need::Bladder => &mut self.bladder,
        }
    }

    /// Drain every need by its rate for `delta_t` seconds, kept within [0, 100]
    pub fn tick(&mut self, delta_t: f32) {
        for need in Need::ALL {
            let rate = need.decay_rate();
            if rate > 0.0 {
                let value = self.get_mut(need);
                *value = (*value - rate * delta_t).clamp(STAT_MIN, STAT_MAX);
            }
        }
    }

    /// Add `amount` to one need, capped at 100
    pub fn replenish(&mut self, need: Need, amount: f32) {
        let value = self.get_mut(need);
        *value = (*value + amount).clamp(STAT_MIN, STAT_MAX);
    }

    pub fn eat_food(&mut self) {
        self.replenish(Need::Hunger, FOOD_AMOUNT);
    }

    pub fn sleep(&mut self) {
        self.replenish(Need::Energy, SLEEP_AMOUNT);
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
