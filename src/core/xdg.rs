//! XDG Base Directory Support
//!
//! Resolves where the resource hub looks for its configuration file
//! on Linux/Unix systems. The hub writes nothing to disk, so only the
//! config directory is resolved.

use std::env;
use std::path::PathBuf;

/// Application directory name under the XDG base directories
pub const APP_DIR: &str = "resource-hub";

/// XDG directory structure for the resource hub
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Resolve directories
    ///
    /// Priority order (highest to lowest):
    /// 1. RESOURCE_HUB_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Resolve config directory
    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("RESOURCE_HUB_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_DIR)
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Log the resolved paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
