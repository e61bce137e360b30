//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only. It never modifies the world.

use hecs::World;

use tesseract_core::components::*;
use tesseract_core::enums::GamePhase;
use tesseract_core::events::SimEvent;
use tesseract_core::player::Player;
use tesseract_core::state::*;
use tesseract_core::types::{Position, SimClock, Velocity, ViewPoint};
use tesseract_core::vitals::Health;

use tesseract_enemy_ai::fire_control::time_until_next_shot;

use crate::controls::DimensionControls;
use crate::effects::TimedEffects;
use crate::systems::wave_manager::{self, WaveState};

/// Engine state the snapshot reads besides the world.
pub struct SnapshotInputs<'a> {
    pub clock: SimClock,
    pub phase: GamePhase,
    pub player: &'a Player,
    pub aim: ViewPoint,
    pub controls: DimensionControls,
    pub effects: &'a TimedEffects,
    pub wave: WaveState,
    pub base_tick_ms: f64,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    inputs: &SnapshotInputs<'_>,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let now_ms = inputs.clock.now_ms;

    GameStateSnapshot {
        clock: inputs.clock,
        phase: inputs.phase,
        player: build_player(inputs.player),
        aim: inputs.aim,
        enemies: build_enemies(world, now_ms),
        projectiles: build_projectiles(world),
        dimension_shift: inputs.controls.shift(),
        time_warp: inputs.controls.motion_scale(),
        effective_tick_ms: inputs.controls.effective_tick_ms(inputs.base_tick_ms),
        effects: inputs.effects.flags(now_ms),
        wave: WaveView {
            level: inputs.player.level(),
            wave_size: inputs.wave.wave_size,
            enemies_remaining: wave_manager::active_enemy_count(world),
        },
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        health: player.health.current(),
        max_health: player.health.max(),
        ammo: player.ammo.current(),
        max_ammo: player.ammo.max(),
        score: player.score(),
        level: player.level(),
        last_damaged_at_ms: player.last_damaged_at_ms,
    }
}

/// Build EnemyView list from active enemies.
fn build_enemies(world: &World, now_ms: f64) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health, &Appearance, &FireControl)>()
        .iter()
        .filter(|(_, (enemy, ..))| enemy.is_active)
        .map(|(_, (enemy, pos, health, appearance, fire))| EnemyView {
            id: enemy.id,
            position: *pos,
            health: health.current(),
            max_health: health.max(),
            kind: enemy.kind,
            size: appearance.size,
            color: appearance.color,
            time_until_next_shot_ms: time_until_next_shot(
                now_ms,
                fire.last_shot_at_ms,
                fire.shoot_cooldown_ms,
            ),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

/// Build ProjectileView list from live projectiles.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity, &Appearance)>()
        .iter()
        .map(|(_, (projectile, pos, vel, appearance))| ProjectileView {
            id: projectile.id,
            position: *pos,
            velocity: *vel,
            color: appearance.color,
            size: appearance.size,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
