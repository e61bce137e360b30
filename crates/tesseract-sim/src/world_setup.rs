//! Entity spawn factories for the arena world.
//!
//! Enemies are only ever created in whole waves; projectiles are created by
//! the enemy AI system.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use tesseract_core::components::*;
use tesseract_core::constants::*;
use tesseract_core::enums::EnemyKind;
use tesseract_core::types::{Position, Rgb, Velocity};
use tesseract_core::vitals::Health;

use tesseract_enemy_ai::fire_control::ShotSolution;
use tesseract_enemy_ai::profiles::{get_profile, roll_appearance, roll_fire_traits, roll_kind};

/// Projectile tint.
const PROJECTILE_COLOR: Rgb = Rgb::new(255, 80, 80);

/// Size of the first wave at `level`: `base + level - 1`.
pub fn initial_wave_size(level: u32) -> u32 {
    WAVE_BASE_COUNT + level.saturating_sub(1)
}

/// Size of the wave spawned after a clear, given the post-increment level.
pub fn next_wave_size(new_level: u32) -> u32 {
    WAVE_BASE_COUNT + new_level
}

/// Spawn `count` enemies with rolled kinds. Returns the spawned ids.
pub fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_enemy_id: &mut u32,
    count: u32,
    now_ms: f64,
) -> Vec<u32> {
    (0..count)
        .map(|_| {
            let kind = roll_kind(rng);
            let id = *next_enemy_id;
            *next_enemy_id += 1;
            let position = random_enemy_position(rng);
            spawn_enemy(world, rng, id, kind, position, now_ms);
            id
        })
        .collect()
}

/// Spawn a single enemy of `kind` at `position`.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: u32,
    kind: EnemyKind,
    position: Position,
    now_ms: f64,
) -> hecs::Entity {
    let profile = get_profile(kind);
    let (color, size) = roll_appearance(rng, &profile);
    let traits = roll_fire_traits(rng);

    let drift = Velocity::new(
        rng.gen_range(-ENEMY_DRIFT_MAX..ENEMY_DRIFT_MAX),
        rng.gen_range(-ENEMY_DRIFT_MAX..ENEMY_DRIFT_MAX),
    );

    world.spawn((
        Enemy {
            id,
            kind,
            is_active: true,
        },
        position,
        drift,
        Health::full(profile.base_health),
        Appearance { color, size },
        FireControl {
            // A fresh enemy waits out one full cooldown before its first shot.
            last_shot_at_ms: now_ms,
            shoot_cooldown_ms: traits.shoot_cooldown_ms,
            accuracy: traits.accuracy,
            detection_range: traits.detection_range,
        },
    ))
}

/// Uniform position inside the enemy region.
fn random_enemy_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(-ENEMY_REGION_HALF_X..ENEMY_REGION_HALF_X),
        rng.gen_range(-ENEMY_REGION_HALF_Y..ENEMY_REGION_HALF_Y),
        rng.gen_range(-ENEMY_DEPTH_RANGE..ENEMY_DEPTH_RANGE),
        rng.gen_range(-ENEMY_W_RANGE..ENEMY_W_RANGE),
    )
}

/// Spawn a projectile from `origin` (view space, `z`/`w` carried for display).
pub fn spawn_projectile(
    world: &mut World,
    id: u32,
    source: u32,
    origin: Position,
    shot: &ShotSolution,
    now_ms: f64,
) -> hecs::Entity {
    world.spawn((
        Projectile {
            id,
            damage: shot.damage,
            created_at_ms: now_ms,
            source,
        },
        origin,
        shot.velocity,
        Appearance {
            color: PROJECTILE_COLOR,
            size: PROJECTILE_SIZE,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_wave_assigns_sequential_ids() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut next_id = 10;

        let ids = spawn_wave(&mut world, &mut rng, &mut next_id, 5, 250.0);
        assert_eq!(ids, vec![10, 11, 12, 13, 14]);
        assert_eq!(next_id, 15);

        for (_, (enemy, pos, fire)) in world.query::<(&Enemy, &Position, &FireControl)>().iter() {
            assert!(enemy.is_active);
            assert!(pos.x.abs() <= ENEMY_REGION_HALF_X);
            assert!(pos.y.abs() <= ENEMY_REGION_HALF_Y);
            assert_eq!(fire.last_shot_at_ms, 250.0);
        }
    }

    #[test]
    fn test_wave_sizes() {
        assert_eq!(initial_wave_size(1), 5);
        assert_eq!(next_wave_size(2), 7);
    }
}
