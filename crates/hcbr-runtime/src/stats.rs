//! Descriptive statistics of a corpus.

use crate::corpus::Corpus;
use hcbr_core::types::{Case, Label};
use serde::Serialize;

/// Size and composition of a corpus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub cases: usize,
    /// Feature occurrences summed over all cases.
    pub total_features: usize,
    pub unique_features: usize,
    /// `unique_features / total_features`.
    pub unique_ratio: f64,
    pub min_case_size: usize,
    pub max_case_size: usize,
    pub avg_case_size: f64,
    pub class_0_cases: usize,
    pub class_1_cases: usize,
}

impl CorpusStats {
    pub fn compute(corpus: &Corpus) -> Self {
        Self::from_parts(corpus.cases(), corpus.feature_count(), corpus.outcomes())
    }

    /// Statistics of cases whose outcomes may be unknown; an empty
    /// `outcomes` leaves both class counts at zero.
    pub fn from_parts(cases: &[Case], unique_features: usize, outcomes: &[Label]) -> Self {
        let sizes = cases.iter().map(|c| c.len());
        let total_features: usize = sizes.clone().sum();
        let min_case_size = sizes.clone().min().unwrap_or(0);
        let max_case_size = sizes.max().unwrap_or(0);

        let class_1_cases = outcomes.iter().filter(|&&l| l == Label::One).count();

        Self {
            cases: cases.len(),
            total_features,
            unique_features,
            unique_ratio: ratio(unique_features, total_features),
            min_case_size,
            max_case_size,
            avg_case_size: ratio(total_features, cases.len()),
            class_0_cases: outcomes.len() - class_1_cases,
            class_1_cases,
        }
    }

    /// Plain-text summary, one `Key: value` per line.
    pub fn to_text(&self) -> String {
        format!(
            "Cases: {}\n\
             Total features: {}\n\
             Unique features: {} (ratio: {:.6})\n\
             Minimum case size: {}\n\
             Maximum case size: {}\n\
             Average case size: {:.2}\n\
             Outcomes: {} class 0, {} class 1\n",
            self.cases,
            self.total_features,
            self.unique_features,
            self.unique_ratio,
            self.min_case_size,
            self.max_case_size,
            self.avg_case_size,
            self.class_0_cases,
            self.class_1_cases,
        )
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}
