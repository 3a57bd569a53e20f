//! Corpus loader: cases and their outcomes, aligned by position.
//!
//! Two plain-text inputs:
//! - a casebase file with one case per line, features as
//!   whitespace-separated tokens;
//! - an outcomes file with one `0` or `1` per line.
//!
//! Blank lines are skipped in both. Feature tokens are interned through a
//! [`FeatureDictionary`], so any token spelling works and the resulting ids
//! are dense.

use crate::dictionary::FeatureDictionary;
use crate::error::{CorpusError, Result};
use hcbr_core::types::{Case, Label};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Aligned cases and outcomes, in arrival order.
#[derive(Debug, Clone)]
pub struct Corpus {
    cases: Vec<Case>,
    outcomes: Vec<Label>,
    dictionary: FeatureDictionary,
}

impl Corpus {
    /// Validate and wrap already encoded cases.
    ///
    /// `dictionary` must cover every feature id used by `cases`.
    pub fn new(cases: Vec<Case>, outcomes: Vec<Label>, dictionary: FeatureDictionary) -> Result<Self> {
        if cases.is_empty() {
            return Err(CorpusError::EmptyCasebase);
        }
        if outcomes.is_empty() {
            return Err(CorpusError::EmptyOutcomes);
        }
        if cases.len() != outcomes.len() {
            return Err(CorpusError::LengthMismatch {
                cases: cases.len(),
                outcomes: outcomes.len(),
            });
        }
        Ok(Self {
            cases,
            outcomes,
            dictionary,
        })
    }

    /// Load a casebase file and its outcomes file.
    pub fn from_files(casebase: &Path, outcomes: &Path) -> Result<Self> {
        let mut dictionary = FeatureDictionary::new();
        let cases = read_casebase_file(casebase, &mut dictionary)?;
        let outcomes = read_outcomes(open(outcomes)?).map_err(|e| with_path(e, outcomes))?;
        Self::new(cases, outcomes, dictionary)
    }

    /// Load from any buffered readers.
    pub fn from_readers<C: BufRead, O: BufRead>(casebase: C, outcomes: O) -> Result<Self> {
        let mut dictionary = FeatureDictionary::new();
        let cases = read_casebase(casebase, &mut dictionary)?;
        let outcomes = read_outcomes(outcomes)?;
        Self::new(cases, outcomes, dictionary)
    }

    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    pub fn outcomes(&self) -> &[Label] {
        &self.outcomes
    }

    pub fn dictionary(&self) -> &FeatureDictionary {
        &self.dictionary
    }

    /// Number of distinct features; the model is sized from this.
    pub fn feature_count(&self) -> usize {
        self.dictionary.len()
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Always false for a validated corpus.
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Cases paired with their outcomes.
    pub fn iter(&self) -> impl Iterator<Item = (&Case, Label)> + '_ {
        self.cases.iter().zip(self.outcomes.iter().copied())
    }
}

/// Parse a casebase, interning every token.
pub fn read_casebase<R: BufRead>(reader: R, dictionary: &mut FeatureDictionary) -> Result<Vec<Case>> {
    let mut cases = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        cases.push(dictionary.encode(line.split_whitespace()));
    }
    Ok(cases)
}

/// Parse a casebase file, attaching its path to read errors.
pub fn read_casebase_file(path: &Path, dictionary: &mut FeatureDictionary) -> Result<Vec<Case>> {
    read_casebase(open(path)?, dictionary).map_err(|e| with_path(e, path))
}

/// Parse an outcomes file.
pub fn read_outcomes<R: BufRead>(reader: R) -> Result<Vec<Label>> {
    let mut outcomes = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let value = line.trim();
        match value {
            "" => continue,
            "0" => outcomes.push(Label::Zero),
            "1" => outcomes.push(Label::One),
            _ => {
                return Err(CorpusError::InvalidOutcome {
                    line: n + 1,
                    value: value.to_string(),
                })
            }
        }
    }
    Ok(outcomes)
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| CorpusError::io(path, e))
}

fn with_path(err: CorpusError, path: &Path) -> CorpusError {
    match err {
        CorpusError::Read(source) => CorpusError::io(path, source),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hcbr_core::types::FeatureId;
    use std::io::{Cursor, Write};

    #[test]
    fn parses_casebase_and_outcomes() {
        let corpus = Corpus::from_readers(
            Cursor::new("0 1\n1 2\n\n0 1 2\n"),
            Cursor::new("1\n0\n1\n"),
        )
        .unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.feature_count(), 3);
        assert_eq!(corpus.cases()[2].features(), &[FeatureId(0), FeatureId(1), FeatureId(2)]);
        assert_eq!(corpus.outcomes(), &[Label::One, Label::Zero, Label::One]);
    }

    #[test]
    fn duplicate_tokens_collapse() {
        let corpus =
            Corpus::from_readers(Cursor::new("5 5 7\n"), Cursor::new("0\n")).unwrap();
        assert_eq!(corpus.cases()[0].len(), 2);
    }

    #[test]
    fn empty_casebase_is_rejected() {
        let err = Corpus::from_readers(Cursor::new("\n\n"), Cursor::new("1\n")).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyCasebase));
    }

    #[test]
    fn empty_outcomes_are_rejected() {
        let err = Corpus::from_readers(Cursor::new("1 2\n"), Cursor::new("")).unwrap_err();
        assert!(matches!(err, CorpusError::EmptyOutcomes));
    }

    #[test]
    fn misaligned_inputs_are_rejected() {
        let err =
            Corpus::from_readers(Cursor::new("1\n2\n"), Cursor::new("1\n")).unwrap_err();
        assert!(matches!(
            err,
            CorpusError::LengthMismatch {
                cases: 2,
                outcomes: 1
            }
        ));
    }

    #[test]
    fn invalid_outcome_names_the_line() {
        let err = read_outcomes(Cursor::new("1\n\nyes\n")).unwrap_err();
        match err {
            CorpusError::InvalidOutcome { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "yes");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let cb_path = dir.path().join("casebase.txt");
        let out_path = dir.path().join("outcomes.txt");
        let mut cb = File::create(&cb_path).unwrap();
        writeln!(cb, "10 20 ").unwrap();
        writeln!(cb, "20 30 ").unwrap();
        std::fs::write(&out_path, "1\n0\n").unwrap();

        let corpus = Corpus::from_files(&cb_path, &out_path).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.dictionary().token(FeatureId(2)), Some("30"));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = Corpus::from_files(&missing, &missing).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }
}
