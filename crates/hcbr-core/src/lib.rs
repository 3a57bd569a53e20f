//! # HCBR Core
//!
//! The case-base model behind the HCBR online binary classifier.
//!
//! A stream of cases (sets of feature ids) with binary outcomes is
//! processed one case at a time: the model predicts the case's label from
//! what it has seen so far, then learns from it.
//!
//! - **CaseBase** - per-feature support counts and per-class strengths
//! - **Projection** - core vs. discretionary split of a query, and `rdf`
//! - **Evidence** - support-weighted class evidence, normalized with a bias `eta`
//! - **DecisionRule** - threshold on the score, or a coin flip when `rdf > delta`
//!
//! ## Quick Start
//!
//! ```rust
//! use hcbr_core::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut clf = Classifier::new(3, 3, ModelConfig::default()).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! clf.learn(&Case::new([FeatureId(0), FeatureId(1)]), Label::One);
//! clf.learn(&Case::new([FeatureId(1), FeatureId(2)]), Label::Zero);
//!
//! let p = clf.predict(&Case::new([FeatureId(0), FeatureId(1), FeatureId(2)]), &mut rng);
//! assert_eq!(p.rdf, 0.0);
//! ```

pub mod types;
pub mod error;
pub mod config;
pub mod casebase;
pub mod projection;
pub mod evidence;
pub mod decision;
pub mod classifier;
pub mod prelude;
