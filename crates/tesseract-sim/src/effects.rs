//! Deferred effects as explicit sim-time expiries.
//!
//! Expiries live on the sim clock, which stops while paused, so pausing
//! suspends every pending effect.

use tesseract_core::constants::*;
use tesseract_core::state::EffectFlags;
use tesseract_core::types::deadline_reached;

/// Pending timed effects. `None` means inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimedEffects {
    muzzle_flash_until: Option<f64>,
    damage_flash_until: Option<f64>,
    reload_until: Option<f64>,
}

/// Effects that expired during `expire`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Expired {
    pub reload_complete: bool,
}

impl TimedEffects {
    /// Start (or restart) the muzzle flash.
    pub fn trigger_muzzle_flash(&mut self, now_ms: f64) {
        self.muzzle_flash_until = Some(now_ms + MUZZLE_FLASH_MS);
    }

    /// Start (or restart) the damage flash.
    pub fn trigger_damage_flash(&mut self, now_ms: f64) {
        self.damage_flash_until = Some(now_ms + DAMAGE_FLASH_MS);
    }

    pub fn start_reload(&mut self, now_ms: f64) {
        self.reload_until = Some(now_ms + RELOAD_MS);
    }

    pub fn is_reloading(&self) -> bool {
        self.reload_until.is_some()
    }

    /// Clear every expiry that is due at `now_ms`.
    pub fn expire(&mut self, now_ms: f64) -> Expired {
        let due = |until: &mut Option<f64>| match *until {
            Some(t) if deadline_reached(now_ms, t) => {
                *until = None;
                true
            }
            _ => false,
        };
        due(&mut self.muzzle_flash_until);
        due(&mut self.damage_flash_until);
        Expired {
            reload_complete: due(&mut self.reload_until),
        }
    }

    pub fn flags(&self, now_ms: f64) -> EffectFlags {
        let active = |until: Option<f64>| until.is_some_and(|t| !deadline_reached(now_ms, t));
        EffectFlags {
            muzzle_flash: active(self.muzzle_flash_until),
            damage_flash: active(self.damage_flash_until),
            reloading: self.is_reloading(),
            reload_remaining_ms: self
                .reload_until
                .map_or(0.0, |t| (t - now_ms).max(0.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_restarts_while_pending() {
        let mut effects = TimedEffects::default();
        effects.trigger_muzzle_flash(0.0);
        effects.trigger_muzzle_flash(80.0);
        assert!(effects.flags(150.0).muzzle_flash);
        effects.expire(180.0);
        assert!(!effects.flags(180.0).muzzle_flash);
    }

    #[test]
    fn test_reload_expires_once() {
        let mut effects = TimedEffects::default();
        effects.start_reload(100.0);
        assert!(effects.is_reloading());
        assert_eq!(effects.flags(600.0).reload_remaining_ms, 1500.0);

        assert!(!effects.expire(2099.0).reload_complete);
        assert!(effects.expire(2100.0).reload_complete);
        assert!(!effects.expire(2200.0).reload_complete);
        assert!(!effects.is_reloading());
    }

    #[test]
    fn test_reload_completes_on_uneven_tick_sums() {
        let mut effects = TimedEffects::default();
        effects.start_reload(0.0);
        let step = RELOAD_MS / 7.0;
        let mut now_ms = 0.0;
        for _ in 0..6 {
            now_ms += step;
            assert!(!effects.expire(now_ms).reload_complete);
        }
        now_ms += step;
        assert!(effects.expire(now_ms).reload_complete);
    }

    #[test]
    fn test_damage_flash_window() {
        let mut effects = TimedEffects::default();
        effects.trigger_damage_flash(1000.0);
        assert!(effects.flags(1199.0).damage_flash);
        assert!(!effects.flags(1200.0).damage_flash);
    }
}
