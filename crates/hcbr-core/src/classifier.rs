//! Predict-then-learn classifier over a [`CaseBase`].

use crate::casebase::CaseBase;
use crate::config::ModelConfig;
use crate::decision::{Decision, DecisionRule};
use crate::error::Result;
use crate::evidence::{Evidence, Normalized};
use crate::projection::Projection;
use crate::types::{Case, Label};
use rand::Rng;

/// Everything the model derived for one query, before learning from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub projection: Projection,
    pub evidence: Evidence,
    pub normalized: Normalized,
    pub rdf: f64,
    pub decision: Decision,
}

impl Prediction {
    pub fn label(&self) -> Label {
        self.decision.label
    }
}

/// A case base bundled with the hyperparameters that read it.
#[derive(Debug, Clone)]
pub struct Classifier {
    casebase: CaseBase,
    config: ModelConfig,
    rule: DecisionRule,
}

impl Classifier {
    /// Build a classifier for feature ids in `[0, total_features)`.
    pub fn new(total_features: usize, expected_cases: usize, config: ModelConfig) -> Result<Self> {
        config.validate()?;
        let casebase =
            CaseBase::new(total_features, expected_cases).with_min_support(config.min_support);
        Ok(Self {
            casebase,
            rule: DecisionRule::new(config.delta),
            config,
        })
    }

    /// Project, weigh, normalize and decide. Does not touch the model.
    pub fn predict<R: Rng + ?Sized>(&self, case: &Case, rng: &mut R) -> Prediction {
        let projection = self.casebase.projection(case);
        let rdf = projection.rdf();
        let evidence = self.casebase.evidence(&projection);
        let normalized = evidence.normalize(self.config.eta);
        let decision = self.rule.decide(&normalized, rdf, rng);
        Prediction {
            projection,
            evidence,
            normalized,
            rdf,
            decision,
        }
    }

    /// Insert a labelled case into the model.
    pub fn learn(&mut self, case: &Case, outcome: Label) {
        self.casebase.add_case(case, outcome);
    }

    pub fn casebase(&self) -> &CaseBase {
        &self.casebase
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }
}
