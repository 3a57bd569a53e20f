//! Errors raised while loading a corpus.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

/// Corpus loading and validation errors. All of them are fatal.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// I/O failure on a stream without a path.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
    /// The casebase holds no cases.
    #[error("the casebase is empty")]
    EmptyCasebase,
    /// The outcome file holds no labels.
    #[error("the outcomes are empty")]
    EmptyOutcomes,
    /// Cases and outcomes are not aligned.
    #[error("casebase has {cases} cases but {outcomes} outcomes were given")]
    LengthMismatch { cases: usize, outcomes: usize },
    /// An outcome line that is neither `0` nor `1`.
    #[error("invalid outcome on line {line}: {value:?} (expected 0 or 1)")]
    InvalidOutcome { line: usize, value: String },
}

impl CorpusError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }
}
