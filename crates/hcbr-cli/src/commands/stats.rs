//! Show corpus statistics.

use anyhow::Result;
use colored::Colorize;
use hcbr::prelude::*;
use hcbr::runtime::corpus::read_casebase_file;
use std::path::Path;

pub fn run(casebase: &Path, outcomes: Option<&Path>) -> Result<()> {
    let stats = match outcomes {
        Some(outcomes) => CorpusStats::compute(&Corpus::from_files(casebase, outcomes)?),
        None => {
            let mut dictionary = FeatureDictionary::new();
            let cases = read_casebase_file(casebase, &mut dictionary)?;
            if cases.is_empty() {
                return Err(CorpusError::EmptyCasebase.into());
            }
            CorpusStats::from_parts(&cases, dictionary.len(), &[])
        }
    };

    println!("{}", "HCBR Corpus Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Cases".blue().bold());
    println!("  Cases:             {}", stats.cases.to_string().cyan());
    println!("  Minimum size:      {}", stats.min_case_size.to_string().cyan());
    println!("  Maximum size:      {}", stats.max_case_size.to_string().cyan());
    println!(
        "  Average size:      {}",
        format!("{:.2}", stats.avg_case_size).cyan()
    );
    println!();

    println!("{}", "Features".blue().bold());
    println!("  Occurrences:       {}", stats.total_features.to_string().cyan());
    println!("  Unique:            {}", stats.unique_features.to_string().cyan());
    println!(
        "  Unique ratio:      {}",
        format!("{:.6}", stats.unique_ratio).cyan()
    );

    if outcomes.is_some() {
        println!();
        println!("{}", "Outcomes".blue().bold());
        println!("  Class 0:           {}", stats.class_0_cases.to_string().cyan());
        println!("  Class 1:           {}", stats.class_1_cases.to_string().cyan());
    }

    Ok(())
}
