//! # HCBR
//!
//! Hypergraph case-base reasoning: an online, instance-based binary
//! classifier.
//!
//! Cases are sets of features paired with a binary outcome. The model
//! predicts each incoming case from per-feature class statistics gathered
//! so far, and only then learns from it, so the running accuracy is an
//! honest online estimate.
//!
//! ## Quick Start
//!
//! ```rust
//! use hcbr::prelude::*;
//! use rand::SeedableRng;
//! use std::io::Cursor;
//!
//! let corpus = Corpus::from_readers(
//!     Cursor::new("0 1\n1 2\n0 1 2\n"),
//!     Cursor::new("1\n0\n1\n"),
//! ).unwrap();
//!
//! let run = RunConfig::default().with_limit(2);
//! let experiment = Experiment::new(&corpus, ModelConfig::default(), &run).unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let summary = experiment.run(&mut rng, 42, |record| {
//!     println!("{}", format_record(record));
//! });
//! assert_eq!(summary.evaluated, 3);
//! ```
//!
//! ## Architecture
//!
//! - [`hcbr_core`] - Case-base model, projection, normalization, decision rule
//! - [`hcbr_runtime`] - Feature dictionary, corpus loading, statistics,
//!   experiment driver, reporting
//!
//! ## Key Concepts
//!
//! | Term | Meaning |
//! |------|---------|
//! | support | number of learned cases containing a feature |
//! | strength | per-class accumulated weight of a feature |
//! | core / discretionary | query features with / without enough support |
//! | rdf | share of discretionary features in a query |
//! | eta | additive bias of the decision score towards class 1 |
//! | delta | rdf threshold above which the prediction is a coin flip |

pub use hcbr_core as core;
pub use hcbr_runtime as runtime;

/// Prelude module for convenient imports.
///
/// ```rust
/// use hcbr::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use hcbr_core::types::{Case, FeatureId, Label};

    // Model
    pub use hcbr_core::casebase::{CaseBase, ModelSummary};
    pub use hcbr_core::classifier::{Classifier, Prediction};
    pub use hcbr_core::config::ModelConfig;
    pub use hcbr_core::decision::{Decision, DecisionRule};
    pub use hcbr_core::evidence::{normalize, Evidence, Normalized};
    pub use hcbr_core::projection::Projection;

    // Error types
    pub use hcbr_core::error::ConfigError;
    pub use hcbr_runtime::error::CorpusError;

    // Runtime
    pub use hcbr_runtime::corpus::Corpus;
    pub use hcbr_runtime::dictionary::FeatureDictionary;
    pub use hcbr_runtime::experiment::{Experiment, IterationRecord, RunConfig, RunPlan, RunSummary};
    pub use hcbr_runtime::report::{format_record, RunReport, RECORD_COLUMNS};
    pub use hcbr_runtime::stats::CorpusStats;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
