//! Simulation constants and gameplay formulas.

use std::f64::consts::PI;

// --- Clock ---

/// Nominal tick period at normal time warp (milliseconds).
pub const BASE_TICK_MS: f64 = 16.0;

/// Upper bound on ticks executed by a single `advance` call.
pub const MAX_TICKS_PER_ADVANCE: u32 = 8;

/// Slack when comparing accumulated sim times against deadlines.
pub const SIM_TIME_EPSILON_MS: f64 = 1e-3;

// --- Arena / view ---

/// Visible play area width in view units.
pub const ARENA_WIDTH: f64 = 800.0;

/// Visible play area height in view units.
pub const ARENA_HEIGHT: f64 = 600.0;

/// World-to-view translation on x (world origin maps to the viewport center).
pub const VIEW_OFFSET_X: f64 = ARENA_WIDTH / 2.0;

/// World-to-view translation on y.
pub const VIEW_OFFSET_Y: f64 = ARENA_HEIGHT / 2.0;

/// Margin beyond the visible area that projectiles may travel before removal.
pub const PROJECTILE_BOUNDS_MARGIN: f64 = 50.0;

// --- Player ---

/// Default player health capacity.
pub const PLAYER_MAX_HEALTH: f64 = 100.0;

/// Default magazine size.
pub const PLAYER_MAX_AMMO: u32 = 30;

/// Damage dealt by one player shot.
pub const PLAYER_SHOT_DAMAGE: f64 = 25.0;

/// Score awarded per confirmed kill.
pub const KILL_SCORE: u64 = 100;

/// Distance from the viewport center under which an enemy projectile hits the player.
pub const PLAYER_HIT_RADIUS: f64 = 25.0;

// --- Timed effects (milliseconds of sim time) ---

pub const MUZZLE_FLASH_MS: f64 = 100.0;
pub const DAMAGE_FLASH_MS: f64 = 200.0;
pub const RELOAD_MS: f64 = 2000.0;

// --- Enemies ---

/// Health of a freshly spawned enemy (two player shots).
pub const ENEMY_BASE_HEALTH: f64 = 50.0;

/// Shot cadence range, sampled once at spawn.
pub const ENEMY_COOLDOWN_MIN_MS: f64 = 1000.0;
pub const ENEMY_COOLDOWN_MAX_MS: f64 = 3000.0;

/// Aim accuracy range, sampled once at spawn.
pub const ENEMY_ACCURACY_MIN: f64 = 0.3;
pub const ENEMY_ACCURACY_MAX: f64 = 0.7;

/// Detection range, sampled once at spawn.
pub const ENEMY_DETECTION_MIN: f64 = 300.0;
pub const ENEMY_DETECTION_MAX: f64 = 500.0;

/// Aim noise half-width at accuracy 0 (22.5 degrees).
pub const ENEMY_MAX_AIM_NOISE: f64 = PI / 8.0;

/// Probability that a spawned enemy is dimensional.
pub const DIMENSIONAL_SPAWN_CHANCE: f64 = 0.2;

/// Maximum drift speed per planar axis (world units per tick).
pub const ENEMY_DRIFT_MAX: f64 = 0.5;

/// Half-extents of the enemy spawn and drift region in world units.
pub const ENEMY_REGION_HALF_X: f64 = 350.0;
pub const ENEMY_REGION_HALF_Y: f64 = 250.0;

/// Depth and dimension ranges for spawned enemies (cosmetic).
pub const ENEMY_DEPTH_RANGE: f64 = 200.0;
pub const ENEMY_W_RANGE: f64 = 100.0;

// --- Enemy projectiles ---

/// Projectile speed range (view units per tick at normal time warp).
pub const PROJECTILE_SPEED_MIN: f64 = 3.0;
pub const PROJECTILE_SPEED_MAX: f64 = 5.0;

/// Projectile damage range.
pub const PROJECTILE_DAMAGE_MIN: f64 = 15.0;
pub const PROJECTILE_DAMAGE_MAX: f64 = 25.0;

/// Projectile lifetime in sim milliseconds.
pub const PROJECTILE_MAX_LIFETIME_MS: f64 = 5000.0;

/// Rendered projectile radius.
pub const PROJECTILE_SIZE: f64 = 5.0;

// --- Dimension & time ---

pub const DIMENSION_SHIFT_MIN: f64 = -100.0;
pub const DIMENSION_SHIFT_MAX: f64 = 100.0;

/// Dimension shift applied per intent.
pub const DIMENSION_SHIFT_STEP: f64 = 10.0;

/// Player `w` nudge applied per intent.
pub const PLAYER_W_STEP: f64 = 5.0;

// --- Waves ---

/// Enemies in the first wave; later waves add one per level.
pub const WAVE_BASE_COUNT: u32 = 5;
