//! Hyperparameters of the classifier.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Hyperparameters shared by projection, normalization and decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Additive bias on the decision score; positive values favour class 1.
    pub eta: f64,
    /// Information threshold in `[0, 1]`. A query whose discretionary ratio
    /// exceeds it is decided by a coin flip.
    pub delta: f64,
    /// Minimum support for a feature to count as core evidence.
    pub min_support: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            eta: 0.0,
            delta: 1.0,
            min_support: 1,
        }
    }
}

impl ModelConfig {
    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_min_support(mut self, min_support: u64) -> Self {
        self.min_support = min_support;
        self
    }

    /// Check every hyperparameter; called once before a run starts.
    pub fn validate(&self) -> Result<()> {
        if !self.eta.is_finite() {
            return Err(ConfigError::invalid_value("eta", self.eta, "must be finite"));
        }
        if !(0.0..=1.0).contains(&self.delta) {
            return Err(ConfigError::out_of_range("delta", 0.0, 1.0, self.delta));
        }
        if self.min_support == 0 {
            return Err(ConfigError::invalid_value(
                "min_support",
                self.min_support,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
