//! The player: the single entity owned directly by the engine.

use serde::{Deserialize, Serialize};

use crate::constants::KILL_SCORE;
use crate::types::Position;
use crate::vitals::{Ammo, Health};

/// Player state. Score only grows through `award_kill`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub health: Health,
    pub ammo: Ammo,
    score: u64,
    level: u32,
    /// Sim time of the most recent hit taken.
    pub last_damaged_at_ms: Option<f64>,
}

impl Player {
    pub fn new(max_health: f64, max_ammo: u32) -> Self {
        Self {
            position: Position::default(),
            health: Health::full(max_health),
            ammo: Ammo::full(max_ammo),
            score: 0,
            level: 1,
            last_damaged_at_ms: None,
        }
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_dead(&self) -> bool {
        self.health.is_depleted()
    }

    /// Take a hit at sim time `now_ms`. Returns `true` if the hit was lethal.
    pub fn apply_damage(&mut self, amount: f64, now_ms: f64) -> bool {
        self.health.apply_damage(amount);
        self.last_damaged_at_ms = Some(now_ms);
        self.health.is_depleted()
    }

    pub fn award_kill(&mut self) {
        self.score += KILL_SCORE;
    }

    /// Move to the next level and return it.
    pub fn advance_level(&mut self) -> u32 {
        self.level += 1;
        self.level
    }

    /// Shift along the dimension axis. `w` is unbounded.
    pub fn nudge_w(&mut self, delta: f64) {
        if delta.is_finite() {
            self.position.w += delta;
        }
    }
}
