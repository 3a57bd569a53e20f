//! Error types for model configuration.
//!
//! The model itself has no recoverable failure modes: malformed cases are
//! contract violations and panic. Only hyperparameters are validated here,
//! before any case is processed.

use thiserror::Error;

/// Result type for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Value outside its permitted closed interval.
    #[error("{field} out of range: {value} (must be in [{min}, {max}])")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },
    /// Value that is not usable for another reason.
    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: String,
        reason: &'static str,
    },
}

impl ConfigError {
    pub fn out_of_range(field: &'static str, min: f64, max: f64, value: f64) -> Self {
        ConfigError::OutOfRange {
            field,
            min,
            max,
            value,
        }
    }

    pub fn invalid_value(
        field: &'static str,
        value: impl ToString,
        reason: &'static str,
    ) -> Self {
        ConfigError::InvalidValue {
            field,
            value: value.to_string(),
            reason,
        }
    }

    /// Name of the offending configuration field.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::OutOfRange { field, .. } | ConfigError::InvalidValue { field, .. } => {
                field
            }
        }
    }
}
