//! Enemy fire-control decisions.
//!
//! Pure functions over plain data. No ECS dependency; the sim builds a
//! `FireContext` per enemy and applies the result.

use glam::DVec2;
use rand::Rng;

use tesseract_core::constants::*;
use tesseract_core::types::Velocity;

/// Input to the fire decision for a single enemy. All points in view space.
pub struct FireContext {
    pub origin: DVec2,
    pub aim: DVec2,
    pub now_ms: f64,
    pub last_shot_at_ms: f64,
    pub shoot_cooldown_ms: f64,
    pub detection_range: f64,
}

/// Why an enemy held fire this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldReason {
    OutOfRange,
    CoolingDown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireDecision {
    Hold(HoldReason),
    /// Fire along `base_angle` (radians, before noise).
    Fire { base_angle: f64 },
}

/// A sampled shot, ready to become a projectile.
#[derive(Debug, Clone, Copy)]
pub struct ShotSolution {
    pub angle: f64,
    pub velocity: Velocity,
    pub damage: f64,
}

/// Decide whether the enemy fires. Range is checked first, then cooldown, so
/// an enemy never fires faster than its cadence.
pub fn evaluate(ctx: &FireContext) -> FireDecision {
    let to_aim = ctx.aim - ctx.origin;

    if to_aim.length() > ctx.detection_range {
        return FireDecision::Hold(HoldReason::OutOfRange);
    }

    if ctx.now_ms - ctx.last_shot_at_ms <= ctx.shoot_cooldown_ms {
        return FireDecision::Hold(HoldReason::CoolingDown);
    }

    FireDecision::Fire {
        base_angle: to_aim.y.atan2(to_aim.x),
    }
}

/// Half-width of the aim noise band: zero at accuracy 1, pi/8 at accuracy 0.
pub fn aim_noise_half_width(accuracy: f64) -> f64 {
    (1.0 - accuracy.clamp(0.0, 1.0)) * ENEMY_MAX_AIM_NOISE
}

/// Sample a noise offset in `(-h, +h)` for the given accuracy.
pub fn sample_aim_noise<R: Rng + ?Sized>(rng: &mut R, accuracy: f64) -> f64 {
    let half_width = aim_noise_half_width(accuracy);
    if half_width <= 0.0 {
        return 0.0;
    }
    // gen_range is half-open; mirror a [0, h) draw so both ends stay open.
    let magnitude = rng.gen_range(0.0..half_width);
    if rng.gen_bool(0.5) {
        magnitude
    } else {
        -magnitude
    }
}

/// Add aim noise and sample speed and damage for a shot along `base_angle`.
pub fn solve_shot<R: Rng + ?Sized>(rng: &mut R, base_angle: f64, accuracy: f64) -> ShotSolution {
    let angle = base_angle + sample_aim_noise(rng, accuracy);
    let speed = rng.gen_range(PROJECTILE_SPEED_MIN..PROJECTILE_SPEED_MAX);
    let damage = rng.gen_range(PROJECTILE_DAMAGE_MIN..PROJECTILE_DAMAGE_MAX);

    ShotSolution {
        angle,
        velocity: Velocity::from_angle(angle, speed),
        damage,
    }
}

/// Milliseconds until the cooldown gate opens (zero if already open).
pub fn time_until_next_shot(now_ms: f64, last_shot_at_ms: f64, shoot_cooldown_ms: f64) -> f64 {
    (shoot_cooldown_ms - (now_ms - last_shot_at_ms)).max(0.0)
}
