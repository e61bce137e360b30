//! Invariant-guarded counters shared by the player and enemies.
//!
//! `Health` stays within `[0, max]` and `Ammo` within `[0, max]` no matter
//! what inputs the mutators receive.

use serde::{Deserialize, Serialize};

/// Hit points. Also used as an ECS component on enemies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    current: f64,
    max: f64,
}

impl Health {
    /// Full health with the given capacity. Non-finite or negative capacities
    /// collapse to zero.
    pub fn full(max: f64) -> Self {
        let max = if max.is_finite() { max.max(0.0) } else { 0.0 };
        Self { current: max, max }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Subtract `amount` and clamp at zero. Non-finite or non-positive
    /// amounts are ignored. Returns the remaining health.
    pub fn apply_damage(&mut self, amount: f64) -> f64 {
        if amount.is_finite() && amount > 0.0 {
            self.current -= amount;
            self.clamp();
        }
        self.current
    }

    /// Force `current` back into `[0, max]`.
    pub fn clamp(&mut self) {
        if !self.current.is_finite() {
            self.current = 0.0;
        }
        self.current = self.current.clamp(0.0, self.max);
    }
}

/// Magazine rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ammo {
    current: u32,
    max: u32,
}

impl Ammo {
    pub fn full(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Take one round. Returns `false` (and changes nothing) when empty.
    pub fn consume(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Refill the magazine.
    pub fn restore(&mut self) {
        self.current = self.max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_clamps_at_zero() {
        let mut health = Health::full(10.0);
        assert_eq!(health.apply_damage(15.0), 0.0);
        assert!(health.is_depleted());
    }

    #[test]
    fn test_health_ignores_bad_damage() {
        let mut health = Health::full(50.0);
        health.apply_damage(f64::NAN);
        health.apply_damage(-20.0);
        health.apply_damage(f64::INFINITY);
        assert_eq!(health.current(), 50.0);
    }

    #[test]
    fn test_health_nonfinite_capacity() {
        let health = Health::full(f64::NAN);
        assert_eq!(health.max(), 0.0);
        assert!(health.is_depleted());
    }

    #[test]
    fn test_ammo_never_negative() {
        let mut ammo = Ammo::full(2);
        assert!(ammo.consume());
        assert!(ammo.consume());
        assert!(!ammo.consume());
        assert_eq!(ammo.current(), 0);
        assert!(ammo.is_empty());

        ammo.restore();
        assert_eq!(ammo.current(), 2);
        assert!(ammo.is_full());
    }
}
