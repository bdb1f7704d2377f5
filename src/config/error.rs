//! Configuration error types.

use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Exploration probability must be a probability.
    #[error("invalid exploration probability {value}: must be within [0, 1]")]
    InvalidExplorationProbability { value: f64 },

    /// K-factor must be a positive, finite number.
    #[error("invalid K-factor {value}: must be finite and greater than zero")]
    InvalidKFactor { value: f64 },

    /// A float-valued environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    FloatParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// An integer-valued environment variable could not be parsed.
    #[error("failed to parse {name}='{value}': {source}")]
    IntParseError {
        name: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
