//! Headless host for the Tesseract Arena simulation.
//!
//! Wires the engine to a realtime game loop thread and a scripted
//! autopilot, and exposes the runs the `tesseract-arena` binary performs.

pub mod arena;
pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use tesseract_core as core;
