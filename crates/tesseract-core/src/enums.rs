//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy kind. Selects palette and spawn weighting only; combat behavior is
/// identical across kinds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Normal,
    /// Phase-shifted enemy with its own palette (20% of spawns).
    Dimensional,
    /// Defined but not produced by any spawn path.
    Boss,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Menu,
    Playing,
    Paused,
    GameOver,
}

/// Global time warp. Scales per-tick motion by `factor()` and the tick
/// interval by `1 / factor()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWarp {
    #[default]
    Normal,
    Slow,
}

impl TimeWarp {
    /// Motion multiplier for this warp setting.
    pub fn factor(self) -> f64 {
        match self {
            TimeWarp::Normal => 1.0,
            TimeWarp::Slow => 0.5,
        }
    }

    /// The other warp setting.
    pub fn toggled(self) -> Self {
        match self {
            TimeWarp::Normal => TimeWarp::Slow,
            TimeWarp::Slow => TimeWarp::Normal,
        }
    }
}
