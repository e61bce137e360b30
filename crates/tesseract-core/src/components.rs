//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. `Position`, `Velocity`
//! and `Health` are defined elsewhere but used as components too.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::Rgb;

/// Identity and liveness of an enemy. Enemies are never despawned mid-wave;
/// they are deactivated and skipped by every system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique within the session.
    pub id: u32,
    pub kind: EnemyKind,
    pub is_active: bool,
}

/// Presentation-only data. `size` doubles as the hit radius for player fire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Appearance {
    pub color: Rgb,
    pub size: f64,
}

/// Per-enemy firing traits, fixed at spawn except `last_shot_at_ms`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FireControl {
    pub last_shot_at_ms: f64,
    pub shoot_cooldown_ms: f64,
    /// 0.0 = widest aim noise, 1.0 = perfect aim.
    pub accuracy: f64,
    pub detection_range: f64,
}

/// Enemy-fired projectile. Position and velocity are in view space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub damage: f64,
    pub created_at_ms: f64,
    /// Id of the enemy that fired it.
    pub source: u32,
}
