//! Tests for validate-catalog

use crate::common::{write_content_file, MINIMAL_CONTENT};
use resource_hub::cli::commands::validate::{check, execute, ValidateArgs};
use resource_hub::cli::OutputFormat;
use std::path::PathBuf;

#[test]
fn test_validate_valid_file() {
    let (_dir, path) = write_content_file("hub.toml", MINIMAL_CONTENT);

    let report = check(&ValidateArgs { path: path.clone() }).unwrap();
    assert_eq!(report.topics, 1);
    assert_eq!(report.entries, 1);
    assert_eq!(report.partners, 0);

    assert!(execute(ValidateArgs { path }, OutputFormat::Human).is_ok());
}

#[test]
fn test_validate_reports_invariant_violation() {
    let (_dir, path) = write_content_file(
        "hub.toml",
        r#"
        [[topics]]
        key = "draft"
        label = "Draft"

        [[topics.sections]]
        heading = "Coming soon"
        paragraphs = []
        "#,
    );

    let err = execute(ValidateArgs { path }, OutputFormat::Json).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("draft"));
    assert!(msg.contains("'Coming soon' has no paragraphs"));
}

#[test]
fn test_validate_missing_file() {
    let args = ValidateArgs {
        path: PathBuf::from("/nonexistent/hub.toml"),
    };
    assert!(check(&args).is_err());
}

#[test]
fn test_validate_shipped_content() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("content/hub.toml");
    let report = check(&ValidateArgs { path }).unwrap();
    assert_eq!(report.topics, 5);
    assert_eq!(report.entries, 13);
    assert_eq!(report.downloads, 3);
}
