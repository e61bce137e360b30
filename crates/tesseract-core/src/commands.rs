//! Player intents sent from the input collaborator to the simulation.
//!
//! Intents are applied immediately, between ticks, never during one.

use serde::{Deserialize, Serialize};

/// All discrete player actions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerIntent {
    // --- Phase transitions ---
    /// Start a new run from the menu or after game over.
    StartGame,
    /// Toggle between playing and paused.
    PauseToggle,
    /// Leave a paused or finished run.
    ReturnToMenu,

    // --- Combat ---
    /// Hit-scan shot at the current aim point.
    Fire,
    /// Begin refilling the magazine.
    Reload,
    /// Move the aim point (view coordinates).
    AimAt { x: f64, y: f64 },

    // --- Dimension & time ---
    /// Shift the dimension scalar; only the sign of `direction` matters.
    ShiftDimension { direction: i8 },
    /// Toggle between normal time and bullet time.
    ToggleTimeWarp,
}
