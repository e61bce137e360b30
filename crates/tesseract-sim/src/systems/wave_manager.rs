//! Wave/level progression: detects a cleared wave and spawns the next one.
//!
//! Evaluated after every other mutation of the tick, so a wave killed this
//! tick is seen as cleared this tick.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use tesseract_core::components::{Enemy, Projectile};
use tesseract_core::events::SimEvent;
use tesseract_core::player::Player;

use crate::world_setup;

/// Running wave bookkeeping owned by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveState {
    /// Enemies spawned for the current wave.
    pub wave_size: u32,
}

/// True when every enemy of the current wave is inactive.
pub fn is_wave_cleared(world: &World) -> bool {
    world
        .query::<&Enemy>()
        .iter()
        .all(|(_, enemy)| !enemy.is_active)
}

/// Number of still-active enemies.
pub fn active_enemy_count(world: &World) -> u32 {
    world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| enemy.is_active)
        .count() as u32
}

/// If the wave is cleared: advance the level, replace the cleared wave with
/// `5 + level` fresh enemies and drop every live projectile. Returns the new
/// level when a wave was spawned.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    player: &mut Player,
    wave: &mut WaveState,
    next_enemy_id: &mut u32,
    now_ms: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> Option<u32> {
    if !is_wave_cleared(world) {
        return None;
    }

    // The cleared wave and all in-flight projectiles go together.
    despawn_buffer.clear();
    despawn_buffer.extend(world.query::<&Enemy>().iter().map(|(entity, _)| entity));
    despawn_buffer.extend(world.query::<&Projectile>().iter().map(|(entity, _)| entity));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    let level = player.advance_level();
    let wave_size = world_setup::next_wave_size(level);
    world_setup::spawn_wave(world, rng, next_enemy_id, wave_size, now_ms);
    wave.wave_size = wave_size;

    info!(level, wave_size, "wave cleared");
    events.push(SimEvent::WaveCleared { level, wave_size });
    Some(level)
}
