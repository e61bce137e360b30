//! Game loop thread: feeds host time to the engine and publishes snapshots.
//!
//! The engine is moved into this thread. Commands arrive via `mpsc` channel
//! and are applied immediately, in arrival order, before the next advance.
//! Snapshots are stored in shared state for polling.

use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use tracing::{debug, info};

use tesseract_core::commands::PlayerIntent;
use tesseract_core::state::GameStateSnapshot;
use tesseract_sim::{SimConfig, SimulationEngine};

use crate::state::{CommandSender, HostCommand, SharedSnapshot};

/// Handle to a running game loop thread.
pub struct GameLoopHandle {
    commands: CommandSender,
    thread: JoinHandle<()>,
}

impl GameLoopHandle {
    /// Forward an intent. Returns `false` once the loop has stopped.
    pub fn send(&self, intent: PlayerIntent) -> bool {
        self.commands.send(HostCommand::Intent(intent)).is_ok()
    }

    /// Stop the loop and wait for the thread to exit.
    pub fn shutdown(self) -> anyhow::Result<()> {
        let _ = self.commands.send(HostCommand::Shutdown);
        self.thread
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))
    }
}

/// Spawns the game loop in a new thread.
///
/// The config is validated here so a bad config fails before any thread
/// exists.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: SharedSnapshot,
) -> anyhow::Result<GameLoopHandle> {
    let engine = SimulationEngine::new(config).context("invalid simulation config")?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<HostCommand>();

    let thread = std::thread::Builder::new()
        .name("tesseract-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })
        .context("failed to spawn game loop thread")?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<HostCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    info!(seed = engine.config().seed, "game loop started");
    let mut last_frame = Instant::now();

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx) {
            break;
        }

        // 2. Feed elapsed host time (engine handles pause semantics internally)
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_frame).as_secs_f64() * 1000.0;
        last_frame = now;
        let snapshot = engine.advance(elapsed_ms);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep one effective tick
        std::thread::sleep(tick_period(engine.effective_tick_ms()));
    }

    info!(tick = engine.clock().tick, "game loop stopped");
}

/// Apply every pending command. Returns `false` when the loop should stop.
fn drain_commands(engine: &mut SimulationEngine, cmd_rx: &mpsc::Receiver<HostCommand>) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(HostCommand::Intent(intent)) => {
                debug!(?intent, "intent received");
                engine.apply_intent(intent);
            }
            Ok(HostCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

fn tick_period(effective_tick_ms: f64) -> Duration {
    if effective_tick_ms.is_finite() && effective_tick_ms > 0.0 {
        Duration::from_secs_f64(effective_tick_ms / 1000.0)
    } else {
        Duration::from_millis(16)
    }
}
