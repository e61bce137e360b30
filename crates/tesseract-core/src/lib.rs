//! Core types and definitions for the TESSERACT arena simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, intents, state snapshots, events, vitals, and constants.
//! It has no dependency on any runtime, renderer, or input framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod player;
pub mod state;
pub mod types;
pub mod vitals;

#[cfg(test)]
mod tests;
