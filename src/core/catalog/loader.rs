//! Content file loading.
//!
//! Content files carry `[[topics]]` plus the optional display
//! resources at the top level. TOML is the authoring format; JSON is
//! accepted for generated content. Both paths end in
//! [`Catalog::new`], so a parsed file is always a valid catalog.

use super::{Catalog, HubContent};
use crate::core::error::{HubError, Result};
use crate::core::types::{Resources, Topic};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Hub content shipped with the binary
const BUILTIN_CONTENT: &str = include_str!("../../../content/hub.toml");

/// On-disk layout of a content file
#[derive(Debug, Deserialize)]
struct ContentFile {
    #[serde(default)]
    topics: Vec<Topic>,

    #[serde(flatten)]
    resources: Resources,
}

impl ContentFile {
    fn into_content(self) -> Result<HubContent> {
        Ok(HubContent {
            catalog: Catalog::new(self.topics)?,
            resources: self.resources,
        })
    }
}

/// Serialization format of a content file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Toml,
    Json,
}

impl ContentFormat {
    /// Pick a format from the file extension (TOML unless `.json`)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ContentFormat::Json,
            _ => ContentFormat::Toml,
        }
    }
}

/// Load the built-in hub content
pub fn builtin() -> Result<HubContent> {
    let content = parse_toml(BUILTIN_CONTENT)?;
    tracing::debug!(
        "Loaded built-in content: {} topics",
        content.catalog.len()
    );
    Ok(content)
}

/// Parse TOML content
pub fn parse_toml(source: &str) -> Result<HubContent> {
    let file: ContentFile = toml::from_str(source)?;
    file.into_content()
}

/// Parse JSON content
pub fn parse_json(source: &str) -> Result<HubContent> {
    let file: ContentFile = serde_json::from_str(source)?;
    file.into_content()
}

/// Read and validate a content file from disk
pub fn load_content(path: impl AsRef<Path>) -> Result<HubContent> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| {
        HubError::ContentParse(format!("Failed to read {}: {e}", path.display()))
    })?;

    let content = match ContentFormat::from_path(path) {
        ContentFormat::Toml => parse_toml(&source)?,
        ContentFormat::Json => parse_json(&source)?,
    };

    tracing::info!(
        "Loaded content from {}: {} topics, {} entries",
        path.display(),
        content.catalog.len(),
        content.catalog.entry_count()
    );

    Ok(content)
}
