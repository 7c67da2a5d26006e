//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub catalog: String,
    pub max_results: usize,
}

/// Collect the effective configuration
pub fn build_response(services: &Services) -> ConfigResponse {
    let config = &services.config;
    let xdg = crate::core::xdg::XdgDirs::new();

    ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        catalog: config
            .content
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string()),
        max_results: config.search.max_results,
    }
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(services);

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  content:");
            println!("    catalog: {}", response.catalog);
            println!("  search:");
            println!("    max_results: {}", response.max_results);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
