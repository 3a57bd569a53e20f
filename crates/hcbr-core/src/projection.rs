//! Projection of a query case onto the model.
//!
//! A projection is a strict bipartition of the query's features into
//! **core** features, for which the model holds evidence, and
//! **discretionary** features, which are novel or too rarely seen to
//! carry signal. The share of discretionary features (`rdf`) is the
//! model's own confidence signal for the query.

use crate::types::FeatureId;
use serde::Serialize;

/// Core/discretionary split of one query case. Both sides stay ascending.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Projection {
    core: Vec<FeatureId>,
    discretionary: Vec<FeatureId>,
}

impl Projection {
    pub(crate) fn new(core: Vec<FeatureId>, discretionary: Vec<FeatureId>) -> Self {
        Self {
            core,
            discretionary,
        }
    }

    /// Features with enough support to contribute evidence.
    pub fn core(&self) -> &[FeatureId] {
        &self.core
    }

    /// Features without reliable support.
    pub fn discretionary(&self) -> &[FeatureId] {
        &self.discretionary
    }

    /// Size of the projected query case.
    pub fn case_len(&self) -> usize {
        self.core.len() + self.discretionary.len()
    }

    /// Number of features actually contributing evidence.
    pub fn non_discretionary_count(&self) -> usize {
        self.core.len()
    }

    /// Discretionary ratio `|discretionary| / |case|`.
    ///
    /// An empty query has no usable evidence at all and reports 1.
    pub fn rdf(&self) -> f64 {
        let len = self.case_len();
        if len == 0 {
            return 1.0;
        }
        self.discretionary.len() as f64 / len as f64
    }

    pub fn is_fully_supported(&self) -> bool {
        self.discretionary.is_empty()
    }
}
