//! Enemy drift integration.
//!
//! Updates active enemy positions from their drift velocity each tick:
//! position += drift * time_warp, reflecting off the enemy region bounds.

use hecs::World;

use tesseract_core::components::Enemy;
use tesseract_core::constants::{ENEMY_REGION_HALF_X, ENEMY_REGION_HALF_Y};
use tesseract_core::types::{Position, Velocity};

/// Run drift for all active enemies.
pub fn run(world: &mut World, motion_scale: f64) {
    for (_entity, (enemy, pos, drift)) in
        world.query_mut::<(&Enemy, &mut Position, &mut Velocity)>()
    {
        if !enemy.is_active {
            continue;
        }
        pos.x += drift.x * motion_scale;
        pos.y += drift.y * motion_scale;
        reflect(&mut pos.x, &mut drift.x, ENEMY_REGION_HALF_X);
        reflect(&mut pos.y, &mut drift.y, ENEMY_REGION_HALF_Y);
    }
}

/// Mirror `coord` back inside `[-half, half]` and flip the velocity component.
fn reflect(coord: &mut f64, velocity: &mut f64, half: f64) {
    if *coord > half {
        *coord = 2.0 * half - *coord;
        *velocity = -velocity.abs();
    } else if *coord < -half {
        *coord = -2.0 * half - *coord;
        *velocity = velocity.abs();
    }
}
