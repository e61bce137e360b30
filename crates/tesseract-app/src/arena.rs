//! Autopilot runs: a fast fixed-step run and a realtime run on the game
//! loop thread. Both end with a `RunSummary`.

use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::{debug, info};

use tesseract_core::commands::PlayerIntent;
use tesseract_core::enums::GamePhase;
use tesseract_core::events::SimEvent;
use tesseract_core::state::GameStateSnapshot;
use tesseract_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;
use crate::game_loop::spawn_game_loop;
use crate::state::{latest, new_shared_snapshot};

/// Totals gathered over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub games_over: u32,
    pub kills: u32,
    pub waves_cleared: u32,
    pub best_score: u64,
    pub best_level: u32,
    pub final_phase: GamePhase,
}

impl RunSummary {
    /// Fold one snapshot's events and state into the totals.
    pub fn record(&mut self, snapshot: &GameStateSnapshot) {
        for event in &snapshot.events {
            match event {
                SimEvent::EnemyDestroyed { .. } => self.kills += 1,
                SimEvent::WaveCleared { .. } => self.waves_cleared += 1,
                SimEvent::GameOver { .. } => self.games_over += 1,
                _ => {}
            }
        }
        self.best_score = self.best_score.max(snapshot.player.score);
        self.best_level = self.best_level.max(snapshot.player.level);
        self.final_phase = snapshot.phase;
    }
}

/// Run `ticks` fixed ticks as fast as possible, driven by the autopilot.
pub fn run_fast(config: SimConfig, ticks: u64, pilot: Autopilot) -> anyhow::Result<RunSummary> {
    let mut engine = SimulationEngine::new(config).context("invalid simulation config")?;
    let mut summary = RunSummary::default();
    let mut snapshot = engine.snapshot();

    while summary.ticks < ticks {
        engine.apply_intents(pilot.decide(&snapshot));
        if engine.phase() != GamePhase::Playing {
            // Nothing left to simulate without a restart.
            debug!(phase = ?engine.phase(), "fast run stopped early");
            summary.record(&engine.snapshot());
            break;
        }
        snapshot = engine.tick();
        summary.ticks += 1;
        summary.record(&snapshot);
    }

    info!(ticks = summary.ticks, "fast run finished");
    Ok(summary)
}

/// Run the game loop thread for `duration` of wall time, polling snapshots
/// and sending autopilot intents at roughly the tick rate.
pub fn run_realtime(
    config: SimConfig,
    duration: Duration,
    pilot: Autopilot,
) -> anyhow::Result<RunSummary> {
    let base_tick_ms = config.base_tick_ms;
    let shared = new_shared_snapshot();
    let handle = spawn_game_loop(config, shared.clone())?;
    // Validated by the spawn above.
    let poll = Duration::from_secs_f64(base_tick_ms / 1000.0);

    let mut summary = RunSummary::default();
    let mut last_tick = None;
    let deadline = Instant::now() + duration;

    handle.send(PlayerIntent::StartGame);
    while Instant::now() < deadline {
        if let Some(snapshot) = latest(&shared) {
            // The loop may publish the same tick more than once.
            if last_tick != Some(snapshot.clock.tick) {
                last_tick = Some(snapshot.clock.tick);
                summary.ticks = snapshot.clock.tick;
                summary.record(&snapshot);
            }
            for intent in pilot.decide(&snapshot) {
                if !handle.send(intent) {
                    break;
                }
            }
        }
        std::thread::sleep(poll);
    }

    handle.shutdown()?;
    info!(ticks = summary.ticks, "realtime run finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fast_run_makes_progress() {
        let summary = run_fast(SimConfig::default(), 3000, Autopilot::new(true)).unwrap();
        assert_eq!(summary.ticks, 3000);
        assert!(summary.kills > 0, "autopilot should destroy something");
        assert!(summary.best_level >= 1);
    }

    #[test]
    fn test_fast_run_is_deterministic() {
        let a = run_fast(SimConfig::default(), 1500, Autopilot::new(true)).unwrap();
        let b = run_fast(SimConfig::default(), 1500, Autopilot::new(true)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fast_run_without_restart_stays_in_menu() {
        let summary = run_fast(SimConfig::default(), 100, Autopilot::new(false)).unwrap();
        assert_eq!(summary.ticks, 0);
        assert_eq!(summary.final_phase, GamePhase::Menu);
    }

    #[test]
    fn test_record_counts_events() {
        let mut summary = RunSummary::default();
        let mut snap = GameStateSnapshot::default();
        snap.events = vec![
            SimEvent::EnemyDestroyed {
                enemy_id: 1,
                kind: tesseract_core::enums::EnemyKind::Normal,
            },
            SimEvent::WaveCleared {
                level: 2,
                wave_size: 7,
            },
        ];
        snap.player.score = 500;
        summary.record(&snap);
        assert_eq!(summary.kills, 1);
        assert_eq!(summary.waves_cleared, 1);
        assert_eq!(summary.best_score, 500);
    }
}
