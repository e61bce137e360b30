//! Scripted input source: plays the game from snapshots alone.

use tesseract_core::commands::PlayerIntent;
use tesseract_core::enums::GamePhase;
use tesseract_core::state::{EnemyView, GameStateSnapshot};
use tesseract_core::types::ViewPoint;

/// Aims at the enemy nearest the player, fires while loaded and reloads
/// when empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot {
    /// Start a new game from the menu or after a game over.
    pub restart: bool,
}

impl Autopilot {
    pub fn new(restart: bool) -> Self {
        Self { restart }
    }

    /// Intents for the next frame, given the latest snapshot.
    pub fn decide(&self, snapshot: &GameStateSnapshot) -> Vec<PlayerIntent> {
        match snapshot.phase {
            GamePhase::Menu | GamePhase::GameOver if self.restart => vec![PlayerIntent::StartGame],
            GamePhase::Playing => self.engage(snapshot),
            _ => Vec::new(),
        }
    }

    fn engage(&self, snapshot: &GameStateSnapshot) -> Vec<PlayerIntent> {
        let mut intents = Vec::new();

        let target = nearest_enemy(snapshot);
        if let Some(enemy) = target {
            let view = enemy.position.to_view();
            intents.push(PlayerIntent::AimAt {
                x: view.x,
                y: view.y,
            });
        }

        if snapshot.effects.reloading {
            return intents;
        }
        if snapshot.player.ammo == 0 {
            intents.push(PlayerIntent::Reload);
        } else if target.is_some() {
            intents.push(PlayerIntent::Fire);
        }
        intents
    }
}

/// Active enemy closest to the player at the view center.
fn nearest_enemy(snapshot: &GameStateSnapshot) -> Option<&EnemyView> {
    let center = ViewPoint::center().as_dvec2();
    snapshot.enemies.iter().min_by(|a, b| {
        let da = a.position.to_view().distance(center);
        let db = b.position.to_view().distance(center);
        da.total_cmp(&db)
    })
}
