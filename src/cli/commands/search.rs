//! Search command - search hub content

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::search::is_blank;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search text (case-insensitive substring match)
    pub query: String,

    /// Maximum number of results (defaults to the configured cap)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show result titles (no text)
    #[arg(long)]
    pub titles_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub title: String,
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_matches: usize,
    pub truncated: bool,
    pub results: Vec<SearchResultItem>,
}

/// Run the query against the shared index.
///
/// Returns `None` for a blank query: no search is performed.
pub fn build_output(args: &SearchArgs, services: &Services) -> Option<SearchResponseOutput> {
    if is_blank(&args.query) {
        return None;
    }

    let limit = args
        .limit
        .unwrap_or(services.config.search.max_results)
        .max(1);
    let hits = services.index.search_with_limit(&args.query, limit);

    Some(SearchResponseOutput {
        query: args.query.clone(),
        total_matches: hits.total_matches,
        truncated: hits.is_truncated(),
        results: hits
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| SearchResultItem {
                rank: i + 1,
                title: entry.title.clone(),
                topic: entry.topic_key.clone(),
                text: if args.titles_only {
                    None
                } else {
                    Some(entry.text.clone())
                },
            })
            .collect(),
    })
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(output) = build_output(&args, services) else {
        match format {
            OutputFormat::Human => println!("{}", colors::dim(output::SEARCH_HINT)),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&None::<()>)?),
        }
        return Ok(());
    };

    match format {
        OutputFormat::Human => print_human(&output),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn print_human(output: &SearchResponseOutput) {
    if output.results.is_empty() {
        println!("{}", output::NO_MATCHES);
        return;
    }

    for result in &output.results {
        println!(
            "[{}] {} {}",
            colors::rank(&result.rank.to_string()),
            colors::title(&result.title),
            colors::dim(&format!("({})", result.topic))
        );
        if let Some(text) = &result.text {
            println!("    {}", colors::dim(&output::truncate_chars(text, 100)));
        }
    }

    if output.truncated {
        let hidden = output.total_matches - output.results.len();
        println!(
            "\n{}",
            colors::dim(&format!(
                "{} more not shown. Refine your search to narrow results.",
                output::count_noun(hidden, "match", "matches")
            ))
        );
    }
}
