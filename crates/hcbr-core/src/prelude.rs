//! HCBR Core Prelude: convenient imports for common usage.
//!
//! ```rust
//! use hcbr_core::prelude::*;
//! ```

pub use crate::casebase::{CaseBase, ModelSummary, UNIT_STRENGTH};
pub use crate::classifier::{Classifier, Prediction};
pub use crate::config::ModelConfig;
pub use crate::decision::{Decision, DecisionRule};
pub use crate::error::ConfigError;
pub use crate::evidence::{normalize, Evidence, Normalized};
pub use crate::projection::Projection;
pub use crate::types::{Case, FeatureId, Label};
