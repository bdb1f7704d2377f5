//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `DUELBOARD_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;

use crate::constants::{
    DEFAULT_BLOB_PREFIX, DEFAULT_ENTRIES_COLLECTION, DEFAULT_EXPLORATION_PROBABILITY,
    DEFAULT_K_FACTOR, INITIAL_RATING,
};

/// Core configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `DUELBOARD_*` overrides on top of
/// defaults, then [`Config::validate`] before wiring a context.
#[derive(Debug, Clone)]
pub struct Config {
    /// Probability of the uniform-random matchmaking branch. Default: `0.5`.
    pub exploration_probability: f64,

    /// K-factor for rating adjustments. Default: `32.0`.
    pub k_factor: f64,

    /// Rating assigned to new entries. Default: `1500`.
    pub initial_rating: i64,

    /// Collection path for entry records. Default: `entries`.
    pub entries_collection: String,

    /// Path prefix for uploaded image blobs. Default: `images`.
    pub blob_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exploration_probability: DEFAULT_EXPLORATION_PROBABILITY,
            k_factor: DEFAULT_K_FACTOR,
            initial_rating: INITIAL_RATING,
            entries_collection: DEFAULT_ENTRIES_COLLECTION.to_string(),
            blob_prefix: DEFAULT_BLOB_PREFIX.to_string(),
        }
    }
}

impl Config {
    const ENV_EXPLORATION_PROBABILITY: &'static str = "DUELBOARD_EXPLORATION_PROBABILITY";
    const ENV_K_FACTOR: &'static str = "DUELBOARD_K_FACTOR";
    const ENV_INITIAL_RATING: &'static str = "DUELBOARD_INITIAL_RATING";
    const ENV_ENTRIES_COLLECTION: &'static str = "DUELBOARD_ENTRIES_COLLECTION";
    const ENV_BLOB_PREFIX: &'static str = "DUELBOARD_BLOB_PREFIX";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let exploration_probability = Self::parse_f64_from_env(
            Self::ENV_EXPLORATION_PROBABILITY,
            defaults.exploration_probability,
        )?;
        let k_factor = Self::parse_f64_from_env(Self::ENV_K_FACTOR, defaults.k_factor)?;
        let initial_rating =
            Self::parse_i64_from_env(Self::ENV_INITIAL_RATING, defaults.initial_rating)?;
        let entries_collection = Self::parse_string_from_env(
            Self::ENV_ENTRIES_COLLECTION,
            defaults.entries_collection,
        );
        let blob_prefix = Self::parse_string_from_env(Self::ENV_BLOB_PREFIX, defaults.blob_prefix);

        let config = Self {
            exploration_probability,
            k_factor,
            initial_rating,
            entries_collection,
            blob_prefix,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.exploration_probability)
            || !self.exploration_probability.is_finite()
        {
            return Err(ConfigError::InvalidExplorationProbability {
                value: self.exploration_probability,
            });
        }

        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(ConfigError::InvalidKFactor {
                value: self.k_factor,
            });
        }

        Ok(())
    }

    fn parse_f64_from_env(name: &'static str, default: f64) -> Result<f64, ConfigError> {
        match env::var(name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::FloatParseError {
                name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_i64_from_env(name: &'static str, default: i64) -> Result<i64, ConfigError> {
        match env::var(name) {
            Ok(value) => value.parse().map_err(|e| ConfigError::IntParseError {
                name,
                value,
                source: e,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(name: &'static str, default: String) -> String {
        env::var(name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }
}
