//! Run reporting: per-case result lines and the JSON run report.

use crate::experiment::{IterationRecord, RunPlan, RunSummary};
use crate::stats::CorpusStats;
use hcbr_core::config::ModelConfig;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Header naming the columns of [`format_record`].
pub const RECORD_COLUMNS: &str =
    "index outcome prediction correct accuracy p1 p0 rdf diagnostic iteration_time total_time";

/// One space-separated result line; floats carry six decimals.
pub fn format_record(r: &IterationRecord) -> String {
    format!(
        "{} {} {} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6} {:.6}",
        r.index,
        r.outcome,
        r.prediction,
        r.correct as f64,
        r.accuracy,
        r.p1,
        r.p0,
        r.rdf,
        r.diagnostic,
        r.iteration_time,
        r.total_time,
    )
}

/// Everything needed to reproduce and inspect a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub model: ModelConfig,
    pub plan: RunPlan,
    pub corpus: CorpusStats,
    pub summary: RunSummary,
    pub records: Vec<IterationRecord>,
}

impl RunReport {
    /// Write the report as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()
    }
}
