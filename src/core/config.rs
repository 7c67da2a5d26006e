//! Configuration management for the resource hub.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{HubError, Result};
use crate::core::search::DEFAULT_MAX_RESULTS;
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Legacy config file name checked in the working directory
const LOCAL_CONFIG_FILE: &str = "resource-hub.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Content configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Authored content file (TOML or JSON). Built-in content when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

/// Search configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum results shown per query
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| HubError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. RESOURCE_HUB_CONFIG env var
    /// 2. XDG config file (~/.config/resource-hub/config.toml)
    /// 3. ./resource-hub.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        xdg.log_paths();

        let mut config = if let Ok(config_path) = env::var("RESOURCE_HUB_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new(LOCAL_CONFIG_FILE).exists() {
                Self::from_file(LOCAL_CONFIG_FILE)?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(path) = env::var("RESOURCE_HUB_CATALOG") {
            if !path.is_empty() {
                self.content.catalog_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(max_results) = env::var("RESOURCE_HUB_MAX_RESULTS") {
            match max_results.parse() {
                Ok(n) => self.search.max_results = n,
                Err(_) => tracing::warn!(
                    "Ignoring RESOURCE_HUB_MAX_RESULTS={max_results:?}: not a number"
                ),
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_results == 0 {
            return Err(HubError::ConfigError(
                "Max results must be non-zero".to_string(),
            ));
        }

        if let Some(path) = &self.content.catalog_path {
            if !path.exists() {
                return Err(HubError::ConfigError(format!(
                    "Catalog file not found: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        match &self.content.catalog_path {
            Some(path) => tracing::info!("  Catalog: {:?}", path),
            None => tracing::info!("  Catalog: built-in"),
        }
        tracing::info!("  Max results: {}", self.search.max_results);
    }
}
