//! Evidence aggregation and normalization.
//!
//! The raw class accumulators grow without bound and together, so they
//! are only comparable after normalizing by their sum.

use serde::Serialize;

/// Raw weighted evidence for each class.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Evidence {
    pub raw_0: f64,
    pub raw_1: f64,
}

impl Evidence {
    pub fn new(raw_0: f64, raw_1: f64) -> Self {
        Self { raw_0, raw_1 }
    }

    pub fn normalize(&self, eta: f64) -> Normalized {
        normalize(self.raw_0, self.raw_1, eta)
    }
}

/// Normalized class probabilities and the bias-adjusted decision score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Normalized {
    pub p0: f64,
    pub p1: f64,
    /// `p1 - p0 + eta`; positive favours class 1.
    pub score: f64,
}

/// Turn raw class evidence into comparable probabilities and a score.
///
/// When there is no evidence at all both classes get 0.5, so the score
/// reduces to `eta`.
pub fn normalize(raw_0: f64, raw_1: f64, eta: f64) -> Normalized {
    let total = raw_0 + raw_1;
    let (p0, p1) = if total > 0.0 {
        (raw_0 / total, raw_1 / total)
    } else {
        (0.5, 0.5)
    };
    Normalized {
        p0,
        p1,
        score: p1 - p0 + eta,
    }
}
