//! Run the online predict-then-learn experiment.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use hcbr::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// File with the casebase description
    #[arg(short, long)]
    pub casebase: PathBuf,

    /// File with the outcomes corresponding to the casebase
    #[arg(short, long)]
    pub outcomes: PathBuf,

    /// Bias of the decision score towards class 1
    #[arg(short, long, allow_hyphen_values = true)]
    pub eta: Option<f64>,

    /// Information threshold in [0, 1]
    #[arg(short, long)]
    pub delta: Option<f64>,

    /// Number of leading cases to learn from (-1 for the whole casebase)
    #[arg(short, long, allow_hyphen_values = true)]
    pub limit: Option<i64>,

    /// Only evaluate the cases after the limit
    #[arg(short, long)]
    pub sample_out: bool,

    /// Report corpus indices instead of the evaluation counter
    #[arg(short, long)]
    pub keep_offset: bool,

    /// Seed of the fallback coin
    #[arg(long)]
    pub seed: Option<u64>,

    /// Minimum support for a feature to count as evidence
    #[arg(long)]
    pub min_support: Option<u64>,

    /// Write a JSON report of the run
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Show a progress bar on stderr
    #[arg(long)]
    pub progress: bool,

    /// Config file (default: hcbr.toml in the current or a parent directory)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl RunArgs {
    /// Flags given on the command line override file values.
    fn merge(&self, config: Config) -> (ModelConfig, RunConfig) {
        let Config { mut model, mut run } = config;
        if let Some(eta) = self.eta {
            model.eta = eta;
        }
        if let Some(delta) = self.delta {
            model.delta = delta;
        }
        if let Some(min_support) = self.min_support {
            model.min_support = min_support;
        }
        if let Some(limit) = self.limit {
            run.limit = limit;
        }
        if let Some(seed) = self.seed {
            run.seed = Some(seed);
        }
        run.sample_out |= self.sample_out;
        run.keep_offset |= self.keep_offset;
        (model, run)
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let (model, run_config) = args.merge(Config::load(args.config.as_deref())?);
    model.validate()?;

    let corpus = Corpus::from_files(&args.casebase, &args.outcomes)?;
    let stats = CorpusStats::compute(&corpus);
    print!("{}", stats.to_text());

    let experiment = Experiment::new(&corpus, model, &run_config)?;
    let (mut rng, seed) = run_config.rng();
    info!(seed, "fallback generator seeded");

    let pb = if args.progress {
        let pb = ProgressBar::new(experiment.plan().evaluated_cases() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} cases")?
                .progress_chars("#>-"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let collect = args.report.is_some();
    let mut records = Vec::new();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut write_error = None;

    let summary = experiment.run(&mut rng, seed, |record| {
        if write_error.is_none() {
            let line = format_record(record);
            if let Err(e) = pb.suspend(|| writeln!(out, "{line}")) {
                write_error = Some(e);
            }
        }
        if collect {
            records.push(record.clone());
        }
        pb.inc(1);
    });
    pb.finish_and_clear();

    if let Some(e) = write_error {
        return Err(e).context("Failed to write results");
    }
    out.flush().context("Failed to write results")?;
    drop(out);

    if let Some(path) = &args.report {
        let report = RunReport {
            model,
            plan: *experiment.plan(),
            corpus: stats,
            summary: summary.clone(),
            records,
        };
        report
            .save(path)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        eprintln!("  {} Report written to {}", "✓".green(), path.display());
    }

    eprintln!();
    eprintln!("{}", "Run Summary".white().bold());
    eprintln!("{}", "═".repeat(40).dimmed());
    eprintln!(
        "  Evaluated:  {}",
        summary.evaluated.to_string().cyan()
    );
    eprintln!(
        "  Correct:    {}",
        summary.correct.to_string().cyan()
    );
    eprintln!(
        "  Accuracy:   {}",
        format!("{:.4}", summary.accuracy).green().bold()
    );
    eprintln!(
        "  Fallbacks:  {}",
        summary.fallbacks.to_string().cyan()
    );
    eprintln!(
        "  Trained on: {} cases",
        summary.trained.to_string().cyan()
    );
    eprintln!("  Seed:       {}", summary.seed);
    eprintln!("  Time:       {:.3}s", summary.total_time);

    Ok(())
}
