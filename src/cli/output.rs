//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

use crate::cli::OutputFormat;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for topic keys
    pub fn topic_key(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for result titles and headings
    pub fn title(s: &str) -> ColoredString {
        s.blue()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for success messages
    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }
}

/// Message shown when a query matches nothing
pub const NO_MATCHES: &str = "No matches. Try a different term.";

/// Hint shown when the query is blank and no search runs
pub const SEARCH_HINT: &str = "Search HIVST, PrEP, myths, services...";

/// Shorten text to at most `max_chars` characters, ending in "..."
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// "1 entry" / "3 entries"
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Print output based on format
pub fn print_output<T: serde::Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            // Human format should be handled by the caller
            // This is a fallback that just prints JSON
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(data) {
                println!("{json}");
            }
        }
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}", colors::success(message));
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
