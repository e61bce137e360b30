//! Kind-specific spawn profiles and per-enemy trait rolls.
//!
//! Kind only selects palette, size band and spawn weighting. Firing traits
//! are rolled independently of kind.

use rand::Rng;

use tesseract_core::constants::*;
use tesseract_core::enums::EnemyKind;
use tesseract_core::types::Rgb;

/// Cosmetic and health parameters for an enemy kind.
pub struct EnemyProfile {
    pub palette: &'static [Rgb],
    /// Size band `[min, max)`; size is also the player-fire hit radius.
    pub size_min: f64,
    pub size_max: f64,
    pub base_health: f64,
}

/// Firing traits fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireTraits {
    pub shoot_cooldown_ms: f64,
    pub accuracy: f64,
    pub detection_range: f64,
}

const NORMAL_PALETTE: &[Rgb] = &[
    Rgb::new(255, 68, 68),
    Rgb::new(255, 136, 0),
    Rgb::new(255, 204, 0),
];

const DIMENSIONAL_PALETTE: &[Rgb] = &[
    Rgb::new(170, 68, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 0, 255),
];

const BOSS_PALETTE: &[Rgb] = &[Rgb::new(255, 215, 0)];

/// Get the profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    match kind {
        EnemyKind::Normal => EnemyProfile {
            palette: NORMAL_PALETTE,
            size_min: 20.0,
            size_max: 35.0,
            base_health: ENEMY_BASE_HEALTH,
        },
        EnemyKind::Dimensional => EnemyProfile {
            palette: DIMENSIONAL_PALETTE,
            size_min: 20.0,
            size_max: 35.0,
            base_health: ENEMY_BASE_HEALTH,
        },
        // Not produced by any spawn path yet.
        EnemyKind::Boss => EnemyProfile {
            palette: BOSS_PALETTE,
            size_min: 45.0,
            size_max: 60.0,
            base_health: ENEMY_BASE_HEALTH,
        },
    }
}

/// Roll the kind of a wave member: dimensional with 20% probability,
/// otherwise normal. Bosses are never rolled.
pub fn roll_kind<R: Rng + ?Sized>(rng: &mut R) -> EnemyKind {
    if rng.gen_bool(DIMENSIONAL_SPAWN_CHANCE) {
        EnemyKind::Dimensional
    } else {
        EnemyKind::Normal
    }
}

/// Pick a palette color and size for `profile`.
pub fn roll_appearance<R: Rng + ?Sized>(rng: &mut R, profile: &EnemyProfile) -> (Rgb, f64) {
    let color = profile.palette[rng.gen_range(0..profile.palette.len())];
    let size = rng.gen_range(profile.size_min..profile.size_max);
    (color, size)
}

/// Roll cooldown, accuracy and detection range uniformly from their bands.
pub fn roll_fire_traits<R: Rng + ?Sized>(rng: &mut R) -> FireTraits {
    FireTraits {
        shoot_cooldown_ms: rng.gen_range(ENEMY_COOLDOWN_MIN_MS..ENEMY_COOLDOWN_MAX_MS),
        accuracy: rng.gen_range(ENEMY_ACCURACY_MIN..ENEMY_ACCURACY_MAX),
        detection_range: rng.gen_range(ENEMY_DETECTION_MIN..ENEMY_DETECTION_MAX),
    }
}
