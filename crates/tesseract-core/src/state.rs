//! Game state snapshot: the complete visible state handed to the renderer/HUD.
//!
//! Snapshots are owned copies; nothing in them points back into the engine.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Position, Rgb, SimClock, Velocity, ViewPoint};

/// Complete game state published after each `advance`/`tick`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub clock: SimClock,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub aim: ViewPoint,
    /// Active enemies only, sorted by id.
    pub enemies: Vec<EnemyView>,
    /// Live projectiles, sorted by id.
    pub projectiles: Vec<ProjectileView>,
    pub dimension_shift: f64,
    /// Motion multiplier (1.0 or 0.5).
    pub time_warp: f64,
    /// Current tick period in milliseconds.
    pub effective_tick_ms: f64,
    pub effects: EffectFlags,
    pub wave: WaveView,
    pub events: Vec<SimEvent>,
}

/// Player stats for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub ammo: u32,
    pub max_ammo: u32,
    pub score: u64,
    pub level: u32,
    pub last_damaged_at_ms: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub kind: EnemyKind,
    pub size: f64,
    pub color: Rgb,
    /// Zero when the enemy may fire on its next tick in range.
    pub time_until_next_shot_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Position,
    pub velocity: Velocity,
    pub color: Rgb,
    pub size: f64,
}

/// Transient presentation flags backed by sim-time expiries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EffectFlags {
    pub muzzle_flash: bool,
    pub damage_flash: bool,
    pub reloading: bool,
    /// Remaining reload time (0 when not reloading).
    pub reload_remaining_ms: f64,
}

/// Wave progress.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub level: u32,
    pub wave_size: u32,
    pub enemies_remaining: u32,
}
