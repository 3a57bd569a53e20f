//! # HCBR Runtime
//!
//! Everything around the model: turning raw feature tokens into cases,
//! loading a corpus, describing it, running the online predict-then-learn
//! experiment and reporting its results.

pub mod error;
pub mod dictionary;
pub mod corpus;
pub mod stats;
pub mod experiment;
pub mod report;
pub mod prelude;
