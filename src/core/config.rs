//! Combat configuration.
//!
//! `CombatConfig` holds the tunables the rules engine consults:
//! - Starting health and level for newly created characters
//! - The level gap at which damage is boosted or reduced
//! - The bonus and reduction multipliers
//! - An optional healing cap
//!
//! Defaults reproduce the stock rules. Configs can be built in code with
//! the `with_*` setters or parsed from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a `CombatConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse combat config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("level gap threshold must be at least 1")]
    InvalidThreshold,

    #[error("{name} must be a finite, non-negative number (got {value})")]
    InvalidMultiplier { name: &'static str, value: f64 },

    #[error("health values must be finite and positive (got {0})")]
    InvalidHealth(f64),
}

/// Rules engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Health a freshly created character starts with.
    pub starting_health: f64,

    /// Level a freshly created character starts at.
    pub starting_level: u32,

    /// Level difference (inclusive) at which damage modifiers kick in.
    pub level_gap_threshold: u32,

    /// Damage multiplier when the attacker out-levels the target.
    pub bonus_multiplier: f64,

    /// Damage multiplier when the target out-levels the attacker.
    pub reduction_multiplier: f64,

    /// Upper bound for healing. `None` allows unbounded overheal.
    pub max_health: Option<f64>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            starting_health: 1000.0,
            starting_level: 0,
            level_gap_threshold: 10,
            bonus_multiplier: 1.5,
            reduction_multiplier: 0.5,
            max_health: None,
        }
    }
}

impl CombatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CombatConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the rules engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_gap_threshold == 0 {
            return Err(ConfigError::InvalidThreshold);
        }
        check_multiplier("bonus_multiplier", self.bonus_multiplier)?;
        check_multiplier("reduction_multiplier", self.reduction_multiplier)?;
        check_health(self.starting_health)?;
        if let Some(max) = self.max_health {
            check_health(max)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn with_starting_health(mut self, health: f64) -> Self {
        self.starting_health = health;
        self
    }

    #[must_use]
    pub fn with_starting_level(mut self, level: u32) -> Self {
        self.starting_level = level;
        self
    }

    #[must_use]
    pub fn with_level_gap_threshold(mut self, threshold: u32) -> Self {
        self.level_gap_threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_bonus_multiplier(mut self, multiplier: f64) -> Self {
        self.bonus_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_reduction_multiplier(mut self, multiplier: f64) -> Self {
        self.reduction_multiplier = multiplier;
        self
    }

    /// Cap healing at `max` health.
    #[must_use]
    pub fn with_max_health(mut self, max: f64) -> Self {
        self.max_health = Some(max);
        self
    }
}

fn check_multiplier(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMultiplier { name, value })
    }
}

fn check_health(value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidHealth(value))
    }
}
