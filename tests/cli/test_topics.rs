//! Tests for list-topics and show-topic

use crate::common::builtin_services;
use resource_hub::cli::commands::topics::{execute_list, execute_show, summaries, ListArgs, ShowArgs};
use resource_hub::cli::OutputFormat;

#[test]
fn test_list_topics_summaries() {
    let services = builtin_services();
    let topics = summaries(&services);

    assert_eq!(topics.len(), 5);
    assert_eq!(topics[0].key, "hivst-basics");
    assert_eq!(topics[0].sections, 3);
    assert_eq!(topics[2].key, "myths-facts");
    assert_eq!(topics[2].sections, 0);
    assert_eq!(topics[2].faqs, 3);
}

#[test]
fn test_list_topics_both_formats() {
    let services = builtin_services();
    assert!(execute_list(ListArgs {}, &services, OutputFormat::Human).is_ok());
    assert!(execute_list(ListArgs {}, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_show_topic() {
    let services = builtin_services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = ShowArgs {
            key: "myths-facts".to_string(),
        };
        assert!(execute_show(args, &services, format).is_ok());
    }
}

#[test]
fn test_show_topic_not_found() {
    let services = builtin_services();
    let args = ShowArgs {
        key: "no-such-topic".to_string(),
    };

    let err = execute_show(args, &services, OutputFormat::Human).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("not found"), "Error should mention 'not found': {msg}");
    assert!(msg.contains("list-topics"));
}
