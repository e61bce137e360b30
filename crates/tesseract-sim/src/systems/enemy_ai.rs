//! Enemy AI system: per-enemy fire decisions each tick.
//!
//! Calls the fire-control functions from tesseract-enemy-ai, then spawns a
//! projectile for each enemy that fires. At most one shot per enemy per tick.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use tesseract_core::components::{Enemy, FireControl};
use tesseract_core::events::SimEvent;
use tesseract_core::types::{Position, ViewPoint};

use tesseract_enemy_ai::fire_control::{evaluate, solve_shot, FireContext, FireDecision};

use crate::world_setup;

/// Run the enemy AI: evaluate every active enemy against the aim point.
/// Returns the number of projectiles spawned.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    aim: ViewPoint,
    now_ms: f64,
    next_projectile_id: &mut u32,
    events: &mut Vec<SimEvent>,
) -> usize {
    // Collect shooters first; spawning needs the world mutably.
    let mut shooters: Vec<(hecs::Entity, u32, Position, f64, f64)> = Vec::new();

    {
        let mut query = world.query::<(&Enemy, &Position, &FireControl)>();
        for (entity, (enemy, pos, fire)) in query.iter() {
            if !enemy.is_active {
                continue;
            }

            let ctx = FireContext {
                origin: pos.to_view(),
                aim: aim.as_dvec2(),
                now_ms,
                last_shot_at_ms: fire.last_shot_at_ms,
                shoot_cooldown_ms: fire.shoot_cooldown_ms,
                detection_range: fire.detection_range,
            };

            if let FireDecision::Fire { base_angle } = evaluate(&ctx) {
                shooters.push((entity, enemy.id, *pos, base_angle, fire.accuracy));
            }
        }
    }

    // RNG draws happen in enemy id order.
    shooters.sort_by_key(|&(_, id, ..)| id);

    for &(entity, enemy_id, pos, base_angle, accuracy) in &shooters {
        let shot = solve_shot(rng, base_angle, accuracy);
        let view = pos.to_view();
        let origin = Position::new(view.x, view.y, pos.z, pos.w);

        let projectile_id = *next_projectile_id;
        *next_projectile_id += 1;
        world_setup::spawn_projectile(world, projectile_id, enemy_id, origin, &shot, now_ms);

        if let Ok(mut fire) = world.get::<&mut FireControl>(entity) {
            fire.last_shot_at_ms = now_ms;
        }

        events.push(SimEvent::EnemyFired {
            enemy_id,
            projectile_id,
        });
    }

    if !shooters.is_empty() {
        trace!(count = shooters.len(), "enemy volley");
    }
    shooters.len()
}
