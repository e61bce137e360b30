//! Combat resolution: player hit-scan fire against enemies, and enemy
//! projectile hits against the player.
//!
//! Both tests are planar; `z` and `w` never affect a hit.

use glam::DVec2;
use hecs::World;
use tracing::debug;

use tesseract_core::components::{Appearance, Enemy};
use tesseract_core::constants::*;
use tesseract_core::events::SimEvent;
use tesseract_core::player::Player;
use tesseract_core::types::{Position, ViewPoint};
use tesseract_core::vitals::Health;

use crate::effects::TimedEffects;

/// Outcome of a fire intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FireOutcome {
    /// `false` for a dry fire (no ammo or reloading).
    pub fired: bool,
    pub hits: u32,
    pub kills: u32,
}

/// Resolve one player shot at `aim`.
///
/// Every active enemy whose projected center lies strictly within its `size`
/// of the aim point takes one hit, so overlapping enemies can all be hit by
/// the same shot while no enemy is hit twice.
pub fn resolve_player_fire(
    world: &mut World,
    player: &mut Player,
    effects: &mut TimedEffects,
    aim: ViewPoint,
    now_ms: f64,
    events: &mut Vec<SimEvent>,
) -> FireOutcome {
    if effects.is_reloading() || !player.ammo.consume() {
        events.push(SimEvent::DryFire);
        return FireOutcome::default();
    }

    effects.trigger_muzzle_flash(now_ms);
    events.push(SimEvent::ShotFired {
        ammo_left: player.ammo.current(),
    });

    let aim = aim.as_dvec2();
    let mut outcome = FireOutcome {
        fired: true,
        ..Default::default()
    };

    for (_entity, (enemy, pos, appearance, health)) in
        world.query_mut::<(&mut Enemy, &Position, &Appearance, &mut Health)>()
    {
        if !enemy.is_active || !is_aim_hit(pos, appearance, aim) {
            continue;
        }

        let health_left = health.apply_damage(PLAYER_SHOT_DAMAGE);
        outcome.hits += 1;
        events.push(SimEvent::EnemyHit {
            enemy_id: enemy.id,
            health_left,
        });

        if health.is_depleted() {
            enemy.is_active = false;
            player.award_kill();
            outcome.kills += 1;
            debug!(enemy_id = enemy.id, score = player.score(), "enemy destroyed");
            events.push(SimEvent::EnemyDestroyed {
                enemy_id: enemy.id,
                kind: enemy.kind,
            });
        }
    }

    outcome
}

/// Whether a shot at `aim` (view space) lands on the enemy.
fn is_aim_hit(pos: &Position, appearance: &Appearance, aim: DVec2) -> bool {
    pos.to_view().distance(aim) < appearance.size
}

/// Whether a projectile at `pos` (view space) is inside the player's hit
/// radius. The player is fixed at the viewport center.
pub fn is_player_hit(pos: &Position) -> bool {
    pos.planar().distance(ViewPoint::center().as_dvec2()) < PLAYER_HIT_RADIUS
}

/// Apply a projectile hit to the player. Returns `true` if it was lethal.
pub fn apply_player_hit(
    player: &mut Player,
    effects: &mut TimedEffects,
    damage: f64,
    now_ms: f64,
    events: &mut Vec<SimEvent>,
) -> bool {
    let lethal = player.apply_damage(damage, now_ms);
    effects.trigger_damage_flash(now_ms);
    events.push(SimEvent::PlayerHit {
        damage,
        health_left: player.health.current(),
    });
    lethal
}
