//! Timed effect resolution: clears due expiries and completes reloads.

use tracing::debug;

use tesseract_core::events::SimEvent;
use tesseract_core::player::Player;

use crate::effects::TimedEffects;

/// Expire due effects at `now_ms`. A finished reload refills the magazine.
pub fn run(
    effects: &mut TimedEffects,
    player: &mut Player,
    now_ms: f64,
    events: &mut Vec<SimEvent>,
) {
    let expired = effects.expire(now_ms);
    if expired.reload_complete {
        player.ammo.restore();
        debug!(ammo = player.ammo.current(), "reload complete");
        events.push(SimEvent::ReloadComplete);
    }
}
