//! HCBR Runtime Prelude: convenient imports for common usage.
//!
//! ```rust
//! use hcbr_runtime::prelude::*;
//! ```

pub use crate::corpus::Corpus;
pub use crate::dictionary::FeatureDictionary;
pub use crate::error::CorpusError;
pub use crate::experiment::{Experiment, IterationRecord, RunConfig, RunPlan, RunSummary};
pub use crate::report::{format_record, RunReport, RECORD_COLUMNS};
pub use crate::stats::CorpusStats;

pub use hcbr_core::prelude::*;
