//! Projectile physics: advance, hit test, bounds and lifetime expiry.
//!
//! All three checks run per projectile in one pass. A projectile that both
//! hits the player and leaves the bounds in the same tick counts as a hit.

use hecs::{Entity, World};

use tesseract_core::components::Projectile;
use tesseract_core::constants::*;
use tesseract_core::events::SimEvent;
use tesseract_core::player::Player;
use tesseract_core::types::{deadline_reached, Position, Velocity};

use crate::effects::TimedEffects;
use crate::systems::combat;

/// Result of one physics pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicsOutcome {
    pub hits: u32,
    pub expired: u32,
    pub out_of_bounds: u32,
    /// The player's health reached zero during this pass.
    pub player_killed: bool,
}

/// Why a projectile leaves the world.
enum Removal {
    Hit(f64),
    OutOfBounds,
    Expired,
}

/// Advance every projectile by `velocity × motion_scale` and remove the
/// ones that hit, left the bounds, or outlived their lifetime.
pub fn run(
    world: &mut World,
    player: &mut Player,
    effects: &mut TimedEffects,
    now_ms: f64,
    motion_scale: f64,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<SimEvent>,
) -> PhysicsOutcome {
    despawn_buffer.clear();
    let mut removals: Vec<(u32, Removal)> = Vec::new();

    for (entity, (projectile, pos, vel)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity)>()
    {
        pos.x += vel.x * motion_scale;
        pos.y += vel.y * motion_scale;

        let removal = if combat::is_player_hit(pos) {
            Removal::Hit(projectile.damage)
        } else if is_out_of_bounds(pos) {
            Removal::OutOfBounds
        } else if deadline_reached(now_ms, projectile.created_at_ms + PROJECTILE_MAX_LIFETIME_MS) {
            Removal::Expired
        } else {
            continue;
        };

        despawn_buffer.push(entity);
        removals.push((projectile.id, removal));
    }

    // Apply hits in id order so damage events are deterministic.
    removals.sort_by_key(|(id, _)| *id);

    let mut outcome = PhysicsOutcome::default();
    for (_, removal) in removals {
        match removal {
            Removal::Hit(damage) => {
                outcome.hits += 1;
                if combat::apply_player_hit(player, effects, damage, now_ms, events) {
                    outcome.player_killed = true;
                }
            }
            Removal::OutOfBounds => outcome.out_of_bounds += 1,
            Removal::Expired => outcome.expired += 1,
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    outcome
}

/// Outside the visible area plus the removal margin.
pub fn is_out_of_bounds(pos: &Position) -> bool {
    pos.x < -PROJECTILE_BOUNDS_MARGIN
        || pos.x > ARENA_WIDTH + PROJECTILE_BOUNDS_MARGIN
        || pos.y < -PROJECTILE_BOUNDS_MARGIN
        || pos.y > ARENA_HEIGHT + PROJECTILE_BOUNDS_MARGIN
}
