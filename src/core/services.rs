//! Unified service container for the resource hub
//!
//! Provides shared, read-only access to the loaded content and the
//! search index built from it.

use crate::core::catalog::{self, Catalog, HubContent};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::{SearchBox, SearchHits, SearchIndex};
use crate::core::types::Resources;
use std::sync::Arc;

/// Unified services container
///
/// Content is loaded and validated, and the index built, exactly once
/// in [`Services::new`]. Nothing here is mutated afterwards.
#[derive(Debug, Clone)]
pub struct Services {
    /// Validated catalog and display resources
    pub content: Arc<HubContent>,

    /// Flattened search index
    pub index: Arc<SearchIndex>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Load content named by the configuration (or the built-in
    /// content) and build the index. Fails on invalid content.
    pub fn new(config: Config) -> Result<Self> {
        let content = match &config.content.catalog_path {
            Some(path) => catalog::load_content(path)?,
            None => catalog::builtin()?,
        };
        Ok(Self::with_content(config, content))
    }

    /// Build services around already-loaded content
    pub fn with_content(config: Config, content: HubContent) -> Self {
        let index = SearchIndex::build(&content.catalog);

        Self {
            content: Arc::new(content),
            index: Arc::new(index),
            config: Arc::new(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.content.catalog
    }

    pub fn resources(&self) -> &Resources {
        &self.content.resources
    }

    /// Search using the configured result cap
    pub fn search(&self, query: &str) -> SearchHits<'_> {
        self.index
            .search_with_limit(query, self.config.search.max_results)
    }

    /// A fresh search box over the shared index
    pub fn search_box(&self) -> SearchBox<'_> {
        SearchBox::with_limit(&self.index, self.config.search.max_results)
    }
}
