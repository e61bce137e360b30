//! Enemy AI for TESSERACT.
//!
//! Implements the fire-control decision (range and cooldown gates), the aim
//! noise model, and kind-driven spawn profiles.

pub mod fire_control;
pub mod profiles;

pub use tesseract_core as core;
