//! Info command - show version and content statistics

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {}

/// Hub information response
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub topics: usize,
    pub entries: usize,
    pub max_results: usize,
}

pub fn build_response(services: &Services) -> InfoResponse {
    InfoResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        topics: services.catalog().len(),
        entries: services.index.len(),
        max_results: services.config.search.max_results,
    }
}

/// Execute the info command
pub fn execute(
    _args: InfoArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let info = build_response(services);

    match format {
        OutputFormat::Human => {
            println!("{} {}", info.name, info.version);
            println!("Topics: {}", info.topics);
            println!("Search entries: {}", info.entries);
            println!("Max results: {}", info.max_results);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
    }

    Ok(())
}
