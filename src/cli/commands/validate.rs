//! Validate command - check an authored content file

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::catalog;
use crate::core::error::Result;
use crate::core::search::flatten;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the validate-catalog command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Content file to check (.toml or .json)
    pub path: PathBuf,
}

/// Validation report for a content file that passed every check
#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub path: String,
    pub topics: usize,
    pub entries: usize,
    pub quick_facts: usize,
    pub partners: usize,
    pub downloads: usize,
}

/// Load the file and count what it provides
pub fn check(args: &ValidateArgs) -> Result<ValidateReport> {
    let content = catalog::load_content(&args.path)?;

    Ok(ValidateReport {
        path: args.path.display().to_string(),
        topics: content.catalog.len(),
        entries: flatten(&content.catalog).len(),
        quick_facts: content.resources.quick_facts.len(),
        partners: content.resources.partners.len(),
        downloads: content.resources.downloads.len(),
    })
}

/// Execute the validate-catalog command
///
/// Does not need loaded services, so it can check a file before it is
/// configured as the hub's content.
pub fn execute(
    args: ValidateArgs,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let report = check(&args)?;

    match format {
        OutputFormat::Human => {
            output::print_success(&format!("{} is valid", report.path));
            println!(
                "  {} across {}",
                colors::number(&output::count_noun(
                    report.entries,
                    "search entry",
                    "search entries"
                )),
                output::count_noun(report.topics, "topic", "topics")
            );
            println!(
                "  {}, {}, {}",
                output::count_noun(report.quick_facts, "quick fact", "quick facts"),
                output::count_noun(report.partners, "partner", "partners"),
                output::count_noun(report.downloads, "download", "downloads")
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
