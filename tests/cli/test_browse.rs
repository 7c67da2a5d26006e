//! Tests for the browse (interactive search box) command

use crate::common::{builtin_services, kits_catalog, services_for};
use resource_hub::cli::commands::browse::run_session;
use resource_hub::cli::OutputFormat;
use std::io::Cursor;

fn run(services: &resource_hub::Services, input: &str, format: OutputFormat) -> (usize, String) {
    colored::control::set_override(false);
    let mut out = Vec::new();
    let searches = run_session(services, Cursor::new(input), &mut out, format, false)
        .expect("browse session should not fail");
    (searches, String::from_utf8(out).unwrap())
}

/// Each typed line re-runs the search
#[test]
fn test_browse_refines_query_per_line() {
    let services = builtin_services();
    let (searches, out) = run(&services, "p\npr\nprep\n", OutputFormat::Json);
    assert_eq!(searches, 3);

    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2]["query"], "prep");
    assert_eq!(lines[2]["titles"].as_array().unwrap().len(), 7);
}

/// Clearing the field performs no search and prints nothing
#[test]
fn test_browse_blank_line_is_silent() {
    let services = builtin_services();
    let (searches, out) = run(&services, "finger\n\n", OutputFormat::Json);
    assert_eq!(searches, 1);
    assert_eq!(out.lines().count(), 1);
}

/// Truncated results are flagged
#[test]
fn test_browse_marks_more_results() {
    let services = services_for(kits_catalog(10));
    let (_, out) = run(&services, "kit\n", OutputFormat::Human);
    assert_eq!(out.lines().filter(|l| l.contains("Kits — Kit")).count(), 8);
    assert!(out.contains("..."));
}
