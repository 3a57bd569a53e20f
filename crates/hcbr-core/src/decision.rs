//! Decision rule: threshold on the score, or a coin flip when too much of
//! the query is unsupported.

use crate::evidence::Normalized;
use crate::types::Label;
use rand::Rng;
use serde::Serialize;

/// Outcome of the decision rule for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub label: Label,
    /// Whether the label came from the randomized fallback.
    pub fallback: bool,
}

/// Stateless rule gated by the information threshold `delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRule {
    delta: f64,
}

impl DecisionRule {
    /// `delta` is expected in `[0, 1]`; range checks belong to
    /// [`ModelConfig::validate`](crate::config::ModelConfig::validate).
    pub fn new(delta: f64) -> Self {
        Self { delta }
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Whether a query with discretionary ratio `rdf` is decided at random.
    pub fn uses_fallback(&self, rdf: f64) -> bool {
        rdf > self.delta
    }

    /// Predict a label. The generator is consumed only on the fallback
    /// branch, so runs replay exactly under a fixed seed.
    pub fn decide<R: Rng + ?Sized>(&self, normalized: &Normalized, rdf: f64, rng: &mut R) -> Decision {
        if self.uses_fallback(rdf) {
            Decision {
                label: Label::from_bool(rng.gen_bool(0.5)),
                fallback: true,
            }
        } else {
            Decision {
                label: Label::from_bool(normalized.score > 0.0),
                fallback: false,
            }
        }
    }
}
