//! Browse command - interactive search box
//!
//! Reads one query per line and re-evaluates it against the shared
//! index on every line, like a search field updating on each change.
//! A blank line clears the box. Ends at EOF.

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::search::SearchBox;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Arguments for the browse command
#[derive(Args, Debug)]
pub struct BrowseArgs {
    /// Do not print the input prompt
    #[arg(long)]
    pub no_prompt: bool,
}

/// One evaluated query in JSON mode
#[derive(Debug, Serialize)]
struct BrowseLine<'a> {
    query: &'a str,
    titles: Vec<&'a str>,
    more: bool,
}

/// Drive a search box from `input`, writing results to `out`.
///
/// Returns the number of queries that triggered a search.
pub fn run_session<R: BufRead, W: Write>(
    services: &Services,
    input: R,
    out: &mut W,
    format: OutputFormat,
    prompt: bool,
) -> io::Result<usize> {
    let mut search_box: SearchBox<'_> = services.search_box();
    let mut searches = 0;

    if prompt && format == OutputFormat::Human {
        writeln!(out, "{}", colors::dim(output::SEARCH_HINT))?;
    }

    let mut lines = input.lines();
    loop {
        if prompt && format == OutputFormat::Human {
            write!(out, "{} ", colors::label("search>"))?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        search_box.set_query(line?);

        let Some(hits) = search_box.results() else {
            continue;
        };
        searches += 1;

        match format {
            OutputFormat::Human => {
                if hits.is_empty() {
                    writeln!(out, "  {}", output::NO_MATCHES)?;
                }
                for title in hits.titles() {
                    writeln!(out, "  {}", colors::title(title))?;
                }
                if hits.is_truncated() {
                    writeln!(out, "  {}", colors::dim("..."))?;
                }
            }
            OutputFormat::Json => {
                let line = BrowseLine {
                    query: search_box.query(),
                    titles: hits.titles(),
                    more: hits.is_truncated(),
                };
                let json = serde_json::to_string(&line).map_err(io::Error::other)?;
                writeln!(out, "{json}")?;
            }
        }
    }

    tracing::debug!("Browse session ended after {} searches", searches);
    Ok(searches)
}

/// Execute the browse command on stdin/stdout
pub fn execute(
    args: BrowseArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(
        services,
        stdin.lock(),
        &mut stdout,
        format,
        !args.no_prompt,
    )?;
    Ok(())
}
