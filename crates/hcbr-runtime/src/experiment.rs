//! Experiment driver: the online predict-then-learn loop.
//!
//! Cases are processed strictly in corpus order. For case `i` the model
//! first predicts (using only cases `< i` from the training prefix), then,
//! if `i` lies inside the training prefix, learns from the true outcome.
//! Each evaluated case yields an [`IterationRecord`] with the running
//! accuracy.

use crate::corpus::Corpus;
use hcbr_core::casebase::ModelSummary;
use hcbr_core::classifier::Classifier;
use hcbr_core::config::ModelConfig;
use hcbr_core::error::ConfigError;
use hcbr_core::types::Label;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, trace, warn};

/// Options of one pass over the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of leading cases the model learns from. Negative values, or
    /// values past the corpus end, mean the whole corpus.
    pub limit: i64,
    /// Only evaluate cases after the training prefix.
    pub sample_out: bool,
    /// Report the corpus index instead of the evaluation counter.
    pub keep_offset: bool,
    /// Seed of the fallback coin; drawn from entropy when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            limit: -1,
            sample_out: false,
            keep_offset: false,
            seed: None,
        }
    }
}

impl RunConfig {
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_sample_out(mut self, sample_out: bool) -> Self {
        self.sample_out = sample_out;
        self
    }

    pub fn with_keep_offset(mut self, keep_offset: bool) -> Self {
        self.keep_offset = keep_offset;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Resolve the seed and build the run's generator.
    pub fn rng(&self) -> (StdRng, u64) {
        let seed = self.seed.unwrap_or_else(rand::random);
        (StdRng::seed_from_u64(seed), seed)
    }
}

/// A [`RunConfig`] resolved against a concrete corpus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunPlan {
    pub total: usize,
    /// Cases `0..training` are learned from.
    pub training: usize,
    /// Effective sample-out flag.
    pub sample_out: bool,
    pub keep_offset: bool,
}

impl RunPlan {
    pub fn resolve(config: &RunConfig, total: usize) -> Self {
        let training = if config.limit < 0 {
            total
        } else if config.limit as u64 > total as u64 {
            warn!(
                limit = config.limit,
                cases = total,
                "limit is larger than the casebase, using the whole casebase"
            );
            total
        } else {
            config.limit as usize
        };

        let sample_out = if config.sample_out && training == total {
            warn!("sample-out disabled: the limit covers the whole casebase");
            false
        } else {
            config.sample_out
        };

        Self {
            total,
            training,
            sample_out,
            keep_offset: config.keep_offset,
        }
    }

    /// Whether case `i` is predicted and scored.
    pub fn evaluates(&self, i: usize) -> bool {
        !self.sample_out || i >= self.training
    }

    /// Whether the model learns from case `i`.
    pub fn trains(&self, i: usize) -> bool {
        i < self.training
    }

    /// Number of cases that produce a record.
    pub fn evaluated_cases(&self) -> usize {
        if self.sample_out {
            self.total - self.training
        } else {
            self.total
        }
    }
}

/// Result of predicting one case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IterationRecord {
    /// Evaluation counter, or corpus index with `keep_offset`.
    pub index: usize,
    pub outcome: Label,
    pub prediction: Label,
    /// Cumulative number of correct predictions.
    pub correct: usize,
    /// `correct / evaluated so far`.
    pub accuracy: f64,
    pub p1: f64,
    pub p0: f64,
    pub rdf: f64,
    /// `p0 + rdf + eta`.
    pub diagnostic: f64,
    pub fallback: bool,
    /// Seconds spent on this case (predict and learn).
    pub iteration_time: f64,
    /// Seconds spent since the run started.
    pub total_time: f64,
}

/// Totals of a finished run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub evaluated: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub fallbacks: usize,
    pub trained: usize,
    pub seed: u64,
    pub total_time: f64,
    pub model: ModelSummary,
}

/// An online experiment over one corpus.
pub struct Experiment<'a> {
    corpus: &'a Corpus,
    model: ModelConfig,
    plan: RunPlan,
    /// Empty model every run starts from.
    blank: Classifier,
}

impl<'a> Experiment<'a> {
    /// Validate hyperparameters and resolve the plan.
    pub fn new(corpus: &'a Corpus, model: ModelConfig, run: &RunConfig) -> Result<Self, ConfigError> {
        let blank = Classifier::new(corpus.feature_count(), corpus.len(), model)?;
        Ok(Self {
            corpus,
            model,
            plan: RunPlan::resolve(run, corpus.len()),
            blank,
        })
    }

    pub fn plan(&self) -> &RunPlan {
        &self.plan
    }

    pub fn model_config(&self) -> &ModelConfig {
        &self.model
    }

    /// Run the whole stream, handing each record to `on_record`.
    ///
    /// `seed` is only recorded in the summary; `rng` must already be
    /// seeded with it.
    pub fn run<R: Rng + ?Sized, F: FnMut(&IterationRecord)>(
        &self,
        rng: &mut R,
        seed: u64,
        mut on_record: F,
    ) -> RunSummary {
        let mut classifier = self.blank.clone();

        info!(
            cases = self.plan.total,
            training = self.plan.training,
            sample_out = self.plan.sample_out,
            eta = self.model.eta,
            delta = self.model.delta,
            seed,
            "starting run"
        );

        let mut correct = 0usize;
        let mut evaluated = 0usize;
        let mut fallbacks = 0usize;
        let mut total_time = 0.0f64;

        for (i, (case, outcome)) in self.corpus.iter().enumerate() {
            let start = Instant::now();

            let prediction = if self.plan.evaluates(i) {
                let p = classifier.predict(case, rng);
                if p.label() == outcome {
                    correct += 1;
                }
                if p.decision.fallback {
                    fallbacks += 1;
                }
                Some(p)
            } else {
                None
            };

            if self.plan.trains(i) {
                classifier.learn(case, outcome);
            }

            let iteration_time = start.elapsed().as_secs_f64();
            total_time += iteration_time;

            let Some(p) = prediction else {
                trace!(case = i, "trained without evaluation");
                continue;
            };

            let index = if self.plan.keep_offset { i } else { evaluated };
            evaluated += 1;
            let record = IterationRecord {
                index,
                outcome,
                prediction: p.label(),
                correct,
                accuracy: correct as f64 / evaluated as f64,
                p1: p.normalized.p1,
                p0: p.normalized.p0,
                rdf: p.rdf,
                diagnostic: p.normalized.p0 + p.rdf + self.model.eta,
                fallback: p.decision.fallback,
                iteration_time,
                total_time,
            };
            debug!(
                case = i,
                outcome = %record.outcome,
                prediction = %record.prediction,
                rdf = record.rdf,
                score = p.normalized.score,
                fallback = record.fallback,
                "evaluated case"
            );
            on_record(&record);
        }

        let accuracy = if evaluated > 0 {
            correct as f64 / evaluated as f64
        } else {
            0.0
        };
        let model = classifier.casebase().summary();
        info!(
            evaluated,
            correct,
            accuracy,
            fallbacks,
            total_time,
            "run complete"
        );

        RunSummary {
            evaluated,
            correct,
            accuracy,
            fallbacks,
            trained: model.cases_seen,
            seed,
            total_time,
            model,
        }
    }

    /// Run and collect every record.
    pub fn run_collect<R: Rng + ?Sized>(&self, rng: &mut R, seed: u64) -> (Vec<IterationRecord>, RunSummary) {
        let mut records = Vec::with_capacity(self.plan.evaluated_cases());
        let summary = self.run(rng, seed, |r| records.push(r.clone()));
        (records, summary)
    }
}
