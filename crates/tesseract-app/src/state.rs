//! State shared between the host and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use tesseract_core::commands::PlayerIntent;
use tesseract_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    /// A player intent to forward to the simulation engine.
    Intent(PlayerIntent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop. `None` until the first tick.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Clone of the latest published snapshot, if any.
pub fn latest(shared: &SharedSnapshot) -> Option<GameStateSnapshot> {
    shared.lock().ok().and_then(|lock| lock.clone())
}

/// Sender half held by the host.
pub type CommandSender = mpsc::Sender<HostCommand>;
