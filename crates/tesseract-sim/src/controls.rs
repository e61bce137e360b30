//! Dimension shift and time warp controls.
//!
//! Time warp compounds: motion per tick is multiplied by the warp factor
//! and the tick interval is divided by it, so bullet time is slower on both
//! axes at once.

use tesseract_core::constants::*;
use tesseract_core::enums::TimeWarp;
use tesseract_core::player::Player;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DimensionControls {
    shift: f64,
    warp: TimeWarp,
}

impl DimensionControls {
    pub fn shift(&self) -> f64 {
        self.shift
    }

    pub fn warp(&self) -> TimeWarp {
        self.warp
    }

    /// Step the shift by `direction × 10` within `[-100, 100]` and nudge the
    /// player's `w` by `direction × 5`. Only the sign of `direction` is used;
    /// zero is a no-op. Returns the new shift, or `None` for a no-op.
    pub fn shift_dimension(&mut self, direction: i8, player: &mut Player) -> Option<f64> {
        let sign = f64::from(direction.signum());
        if sign == 0.0 {
            return None;
        }
        self.shift = (self.shift + sign * DIMENSION_SHIFT_STEP)
            .clamp(DIMENSION_SHIFT_MIN, DIMENSION_SHIFT_MAX);
        player.nudge_w(sign * PLAYER_W_STEP);
        Some(self.shift)
    }

    pub fn toggle_time_warp(&mut self) -> TimeWarp {
        self.warp = self.warp.toggled();
        self.warp
    }

    /// Multiplier applied to all per-tick motion.
    pub fn motion_scale(&self) -> f64 {
        self.warp.factor()
    }

    /// Tick interval for the current warp: `base_tick_ms / factor`.
    pub fn effective_tick_ms(&self, base_tick_ms: f64) -> f64 {
        base_tick_ms / self.warp.factor()
    }
}
