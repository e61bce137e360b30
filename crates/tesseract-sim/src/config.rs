//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tesseract_core::constants::{
    BASE_TICK_MS, MAX_TICKS_PER_ADVANCE, PLAYER_MAX_AMMO, PLAYER_MAX_HEALTH,
};

/// Configuration for starting a new simulation. Missing JSON fields take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same intents = same simulation.
    pub seed: u64,
    /// Tick period at normal time warp (milliseconds).
    pub base_tick_ms: f64,
    pub player_max_health: f64,
    pub player_max_ammo: u32,
    /// Ticks a single `advance` may run before surplus time is dropped.
    pub max_ticks_per_advance: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tick period must be finite and positive, got {0}")]
    InvalidTickPeriod(f64),
    #[error("player max health must be finite and positive, got {0}")]
    InvalidMaxHealth(f64),
    #[error("player max ammo must be at least 1")]
    ZeroAmmoCapacity,
    #[error("max ticks per advance must be at least 1")]
    ZeroTickCap,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            base_tick_ms: BASE_TICK_MS,
            player_max_health: PLAYER_MAX_HEALTH,
            player_max_ammo: PLAYER_MAX_AMMO,
            max_ticks_per_advance: MAX_TICKS_PER_ADVANCE,
        }
    }
}

impl SimConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_tick_ms.is_finite() || self.base_tick_ms <= 0.0 {
            return Err(ConfigError::InvalidTickPeriod(self.base_tick_ms));
        }
        if !self.player_max_health.is_finite() || self.player_max_health <= 0.0 {
            return Err(ConfigError::InvalidMaxHealth(self.player_max_health));
        }
        if self.player_max_ammo == 0 {
            return Err(ConfigError::ZeroAmmoCapacity);
        }
        if self.max_ticks_per_advance == 0 {
            return Err(ConfigError::ZeroTickCap);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.base_tick_ms, BASE_TICK_MS);
        assert_eq!(config.player_max_ammo, PLAYER_MAX_AMMO);
    }

    #[test]
    fn test_rejects_bad_tick_period() {
        let err = SimConfig::from_json(r#"{ "base_tick_ms": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTickPeriod(_)));
    }

    #[test]
    fn test_rejects_zero_ammo() {
        let config = SimConfig {
            player_max_ammo: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroAmmoCapacity)));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse config"));
    }
}
