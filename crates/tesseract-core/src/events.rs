//! Events emitted by the simulation for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TimeWarp};

/// Feedback events, drained into the next snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Player shot consumed a round.
    ShotFired { ammo_left: u32 },
    /// Fire intent with an empty magazine or mid-reload.
    DryFire,
    EnemyHit { enemy_id: u32, health_left: f64 },
    EnemyDestroyed { enemy_id: u32, kind: EnemyKind },
    EnemyFired { enemy_id: u32, projectile_id: u32 },
    PlayerHit { damage: f64, health_left: f64 },
    ReloadStarted { duration_ms: f64 },
    ReloadComplete,
    DimensionShifted { shift: f64 },
    TimeWarpChanged { warp: TimeWarp },
    /// All enemies of the previous wave down; `level` is the new level.
    WaveCleared { level: u32, wave_size: u32 },
    GameOver { score: u64, level: u32 },
}
