//! Simulation engine for TESSERACT.
//!
//! Owns the hecs ECS world, applies player intents between ticks, runs
//! systems at a fixed (time-warped) tick period, and produces
//! `GameStateSnapshot`s for the rendering collaborator.

pub mod config;
pub mod controls;
pub mod effects;
pub mod engine;
pub mod systems;
pub mod world_setup;

pub use config::{ConfigError, SimConfig};
pub use engine::SimulationEngine;
pub use tesseract_core as core;
