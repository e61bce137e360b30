//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only)
//! plus whatever engine-owned state they touch. They do not own state.

pub mod combat;
pub mod drift;
pub mod effects;
pub mod enemy_ai;
pub mod projectiles;
pub mod snapshot;
pub mod wave_manager;
