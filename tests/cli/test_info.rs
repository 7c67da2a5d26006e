//! Tests for show-config, get-info, show-resources and completions

use crate::common::builtin_services;
use clap_complete::Shell;
use resource_hub::cli::commands::completions::write_completions;
use resource_hub::cli::commands::{config, info, resources};
use resource_hub::cli::OutputFormat;

#[test]
fn test_get_info_counts() {
    let services = builtin_services();
    let response = info::build_response(&services);

    assert_eq!(response.name, "resource-hub");
    assert_eq!(response.topics, 5);
    assert_eq!(response.entries, 13);
    assert_eq!(response.max_results, 8);

    assert!(info::execute(info::InfoArgs {}, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_show_config_builtin_catalog() {
    let services = builtin_services();
    let response = config::build_response(&services);

    assert_eq!(response.catalog, "built-in");
    assert_eq!(response.max_results, 8);
    assert!(response.config_file.ends_with("config.toml"));

    assert!(config::execute(config::ConfigArgs {}, &services, OutputFormat::Human).is_ok());
}

#[test]
fn test_show_resources_both_formats() {
    let services = builtin_services();
    for format in [OutputFormat::Human, OutputFormat::Json] {
        assert!(resources::execute(resources::ResourcesArgs {}, &services, format).is_ok());
    }
}

#[test]
fn test_completions_mention_commands() {
    let mut out = Vec::new();
    write_completions(Shell::Bash, &mut out);
    let script = String::from_utf8(out).unwrap();

    assert!(script.contains("resource-hub"));
    assert!(script.contains("show-topic"));
}
