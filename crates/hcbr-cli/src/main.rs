//! HCBR CLI - run the online case-base classifier over a corpus.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use hcbr::prelude::{ConfigError, CorpusError};
use std::path::PathBuf;
use tracing::Level;

/// Exit status for rejected hyperparameters.
const EXIT_CONFIG: i32 = 2;
/// Exit status for missing, empty or misaligned input data.
const EXIT_DATA: i32 = 3;

#[derive(Parser)]
#[command(name = "hcbr")]
#[command(author, version, about = "HCBR - Hypergraph Case-Base Reasoner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default hcbr.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Predict every case before learning it and report running accuracy
    Run(commands::run::RunArgs),

    /// Show corpus statistics
    Stats {
        /// File with the casebase description
        #[arg(short, long)]
        casebase: PathBuf,

        /// File with the outcomes corresponding to the casebase
        #[arg(short, long)]
        outcomes: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run(args) => commands::run::run(&args),
        Commands::Stats { casebase, outcomes } => commands::stats::run(&casebase, outcomes.as_deref()),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(exit_code(&err));
    }
}

/// Logs go to stderr so result lines on stdout stay machine-readable.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        EXIT_CONFIG
    } else if err.downcast_ref::<CorpusError>().is_some() {
        EXIT_DATA
    } else {
        1
    }
}
