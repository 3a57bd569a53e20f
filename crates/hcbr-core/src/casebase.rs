//! The case-base model: per-feature support and class strength.
//!
//! Every insertion touches only the features of the inserted case, and
//! every query reads only the features of the query case, so both cost
//! O(|case|) regardless of how many cases have been seen.

use crate::evidence::Evidence;
use crate::projection::Projection;
use crate::types::{Case, FeatureId, Label};
use serde::Serialize;

/// Unit contribution added to a feature's strength for its case's class.
pub const UNIT_STRENGTH: f64 = 1.0;

/// Online statistics over all inserted cases.
#[derive(Debug, Clone)]
pub struct CaseBase {
    /// Number of inserted cases containing each feature.
    support: Vec<u64>,
    /// `strength[class][feature]`, accumulated co-occurrence with each class.
    strength: [Vec<f64>; 2],
    /// Support a feature needs before projection treats it as core.
    min_support: u64,
    expected_cases: usize,
    cases_seen: usize,
    class_counts: [usize; 2],
}

/// Read-only summary of the model state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummary {
    pub total_features: usize,
    pub observed_features: usize,
    pub expected_cases: usize,
    pub cases_seen: usize,
    pub class_0_cases: usize,
    pub class_1_cases: usize,
    pub min_support: u64,
}

impl CaseBase {
    /// Create an empty model for feature ids in `[0, total_features)`.
    ///
    /// `expected_cases` is a sizing hint, not a cap.
    pub fn new(total_features: usize, expected_cases: usize) -> Self {
        Self {
            support: vec![0; total_features],
            strength: [vec![0.0; total_features], vec![0.0; total_features]],
            min_support: 1,
            expected_cases,
            cases_seen: 0,
            class_counts: [0, 0],
        }
    }

    /// Set the support a feature needs to count as core evidence.
    pub fn with_min_support(mut self, min_support: u64) -> Self {
        self.min_support = min_support;
        self
    }

    /// Insert a labelled case.
    ///
    /// Each feature's support grows by one and the strength of the case's
    /// class grows by [`UNIT_STRENGTH`]; the other class is untouched.
    ///
    /// # Panics
    ///
    /// Panics if the case holds a feature id outside the configured range.
    pub fn add_case(&mut self, case: &Case, outcome: Label) {
        // Cases are ascending, so checking the last id covers the whole case
        // before any table is touched.
        if let Some(&last) = case.features().last() {
            self.checked_index(last);
        }
        let row = outcome.index();
        for feature in case.iter() {
            let k = self.checked_index(feature);
            self.support[k] += 1;
            self.strength[row][k] += UNIT_STRENGTH;
        }
        self.cases_seen += 1;
        self.class_counts[row] += 1;
    }

    /// Split a query case into core and discretionary features.
    ///
    /// A feature is discretionary when its support is below the model's
    /// minimum support, i.e. by default when it has never been observed.
    ///
    /// # Panics
    ///
    /// Panics if the case holds a feature id outside the configured range.
    pub fn projection(&self, case: &Case) -> Projection {
        let mut core = Vec::with_capacity(case.len());
        let mut discretionary = Vec::new();
        for feature in case.iter() {
            let k = self.checked_index(feature);
            if self.support[k] >= self.min_support {
                core.push(feature);
            } else {
                discretionary.push(feature);
            }
        }
        Projection::new(core, discretionary)
    }

    /// Weighted class evidence over the core features of a projection.
    ///
    /// Each core feature contributes its class strengths scaled by its
    /// support relative to the number of core features in the query.
    pub fn evidence(&self, projection: &Projection) -> Evidence {
        let non_discretionary = projection.non_discretionary_count();
        if non_discretionary == 0 {
            return Evidence::default();
        }
        let denom = non_discretionary as f64;
        let mut evidence = Evidence::default();
        for &feature in projection.core() {
            let k = self.checked_index(feature);
            let r = self.support[k] as f64 / denom;
            evidence.raw_0 += self.strength[0][k] * r;
            evidence.raw_1 += self.strength[1][k] * r;
        }
        evidence
    }

    /// Number of inserted cases containing `feature`.
    pub fn support(&self, feature: FeatureId) -> u64 {
        self.support[self.checked_index(feature)]
    }

    /// Accumulated strength of `feature` for `label`.
    pub fn strength(&self, label: Label, feature: FeatureId) -> f64 {
        self.strength[label.index()][self.checked_index(feature)]
    }

    pub fn total_features(&self) -> usize {
        self.support.len()
    }

    pub fn expected_cases(&self) -> usize {
        self.expected_cases
    }

    pub fn cases_seen(&self) -> usize {
        self.cases_seen
    }

    pub fn min_support(&self) -> u64 {
        self.min_support
    }

    /// Number of inserted cases labelled `label`.
    pub fn class_count(&self, label: Label) -> usize {
        self.class_counts[label.index()]
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            total_features: self.total_features(),
            observed_features: self.support.iter().filter(|&&s| s > 0).count(),
            expected_cases: self.expected_cases,
            cases_seen: self.cases_seen,
            class_0_cases: self.class_counts[0],
            class_1_cases: self.class_counts[1],
            min_support: self.min_support,
        }
    }

    fn checked_index(&self, feature: FeatureId) -> usize {
        let k = feature.index();
        assert!(
            k < self.support.len(),
            "feature id {} outside model range [0, {})",
            feature,
            self.support.len()
        );
        k
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(raw: &[u32]) -> Case {
        Case::new(raw.iter().copied().map(FeatureId))
    }

    /// `{0,1} -> 1`, `{1,2} -> 0`.
    fn two_case_model() -> CaseBase {
        let mut cb = CaseBase::new(3, 3);
        cb.add_case(&case(&[0, 1]), Label::One);
        cb.add_case(&case(&[1, 2]), Label::Zero);
        cb
    }

    #[test]
    fn new_model_is_empty() {
        let cb = CaseBase::new(4, 10);
        assert_eq!(cb.total_features(), 4);
        assert_eq!(cb.expected_cases(), 10);
        assert_eq!(cb.cases_seen(), 0);
        for f in 0..4 {
            assert_eq!(cb.support(FeatureId(f)), 0);
            assert_eq!(cb.strength(Label::Zero, FeatureId(f)), 0.0);
            assert_eq!(cb.strength(Label::One, FeatureId(f)), 0.0);
        }
    }

    #[test]
    fn add_case_updates_only_its_class() {
        let cb = two_case_model();
        assert_eq!(cb.support(FeatureId(0)), 1);
        assert_eq!(cb.support(FeatureId(1)), 2);
        assert_eq!(cb.support(FeatureId(2)), 1);

        assert_eq!(cb.strength(Label::One, FeatureId(0)), 1.0);
        assert_eq!(cb.strength(Label::One, FeatureId(1)), 1.0);
        assert_eq!(cb.strength(Label::One, FeatureId(2)), 0.0);
        assert_eq!(cb.strength(Label::Zero, FeatureId(0)), 0.0);
        assert_eq!(cb.strength(Label::Zero, FeatureId(1)), 1.0);
        assert_eq!(cb.strength(Label::Zero, FeatureId(2)), 1.0);

        assert_eq!(cb.cases_seen(), 2);
        assert_eq!(cb.class_count(Label::One), 1);
        assert_eq!(cb.class_count(Label::Zero), 1);
    }

    #[test]
    fn expected_cases_is_not_a_cap() {
        let mut cb = CaseBase::new(2, 1);
        cb.add_case(&case(&[0]), Label::One);
        cb.add_case(&case(&[1]), Label::One);
        assert_eq!(cb.cases_seen(), 2);
    }

    #[test]
    fn worked_example_evidence() {
        let cb = two_case_model();
        let proj = cb.projection(&case(&[0, 1, 2]));
        assert_eq!(proj.core(), &[FeatureId(0), FeatureId(1), FeatureId(2)]);
        assert!(proj.discretionary().is_empty());
        assert_eq!(proj.rdf(), 0.0);

        // r = [1/3, 2/3, 1/3]
        let ev = cb.evidence(&proj);
        assert!((ev.raw_0 - 1.0).abs() < 1e-12, "raw_0 = {}", ev.raw_0);
        assert!((ev.raw_1 - 1.0).abs() < 1e-12, "raw_1 = {}", ev.raw_1);
    }

    #[test]
    fn unseen_features_are_discretionary() {
        let mut cb = CaseBase::new(5, 2);
        cb.add_case(&case(&[0, 1]), Label::One);
        let proj = cb.projection(&case(&[1, 3, 4]));
        assert_eq!(proj.core(), &[FeatureId(1)]);
        assert_eq!(proj.discretionary(), &[FeatureId(3), FeatureId(4)]);
        assert!((proj.rdf() - 2.0 / 3.0).abs() < 1e-12);

        // single core feature: r = 1/1
        let ev = cb.evidence(&proj);
        assert_eq!(ev.raw_1, 1.0);
        assert_eq!(ev.raw_0, 0.0);
    }

    #[test]
    fn min_support_raises_the_core_threshold() {
        let cb = two_case_model().with_min_support(2);
        let proj = cb.projection(&case(&[0, 1, 2]));
        assert_eq!(proj.core(), &[FeatureId(1)]);
        assert_eq!(proj.discretionary(), &[FeatureId(0), FeatureId(2)]);
    }

    #[test]
    fn projection_does_not_mutate() {
        let cb = two_case_model();
        let before = cb.summary();
        let _ = cb.projection(&case(&[0, 2]));
        assert_eq!(cb.summary(), before);
    }

    #[test]
    fn evidence_is_zero_without_core_features() {
        let cb = CaseBase::new(3, 1);
        let proj = cb.projection(&case(&[0, 1]));
        assert_eq!(proj.rdf(), 1.0);
        assert_eq!(cb.evidence(&proj), Evidence::default());
    }

    #[test]
    fn summary_counts_observed_features() {
        let summary = two_case_model().summary();
        assert_eq!(summary.total_features, 3);
        assert_eq!(summary.observed_features, 3);
        assert_eq!(summary.cases_seen, 2);
        assert_eq!(summary.class_0_cases, 1);
        assert_eq!(summary.class_1_cases, 1);
    }

    #[test]
    #[should_panic(expected = "outside model range")]
    fn add_case_rejects_out_of_range_feature() {
        let mut cb = CaseBase::new(2, 1);
        cb.add_case(&case(&[0, 2]), Label::One);
    }

    #[test]
    #[should_panic(expected = "outside model range")]
    fn projection_rejects_out_of_range_feature() {
        let cb = CaseBase::new(2, 1);
        cb.projection(&case(&[5]));
    }
}
