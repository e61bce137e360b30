//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{SIM_TIME_EPSILON_MS, VIEW_OFFSET_X, VIEW_OFFSET_Y};

/// Position in arena space. `x`/`y` are the collision plane, `z` is depth and
/// `w` is the dimension coordinate; neither `z` nor `w` affects hit tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

/// Planar velocity (units per tick at normal time warp).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// A point in view space (where the aim point and projectiles live).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewPoint {
    pub x: f64,
    pub y: f64,
}

/// Cosmetic RGB color carried for the rendering collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Ticks executed since the game started.
    pub tick: u64,
    /// Simulation milliseconds elapsed since the game started.
    pub now_ms: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Collision-plane coordinates.
    pub fn planar(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// World position translated into view space.
    pub fn to_view(&self) -> DVec2 {
        DVec2::new(self.x + VIEW_OFFSET_X, self.y + VIEW_OFFSET_Y)
    }

    /// Planar distance to another position.
    pub fn planar_distance_to(&self, other: &Position) -> f64 {
        self.planar().distance(other.planar())
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Velocity of the given speed along `angle` (radians, atan2 convention).
    pub fn from_angle(angle: f64, speed: f64) -> Self {
        Self {
            x: angle.cos() * speed,
            y: angle.sin() * speed,
        }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    /// Heading in radians (atan2 convention, 0 = +x).
    pub fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl ViewPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The viewport center, where the player sits.
    pub fn center() -> Self {
        Self::new(VIEW_OFFSET_X, VIEW_OFFSET_Y)
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl SimClock {
    /// Advance by one tick of `step_ms` simulation milliseconds.
    pub fn advance(&mut self, step_ms: f64) {
        self.tick += 1;
        self.now_ms += step_ms;
    }
}

/// Whether `now_ms` has reached `deadline_ms`. Sim times are sums of tick
/// periods, so a deadline within float rounding counts as reached.
pub fn deadline_reached(now_ms: f64, deadline_ms: f64) -> bool {
    now_ms >= deadline_ms - SIM_TIME_EPSILON_MS
}
