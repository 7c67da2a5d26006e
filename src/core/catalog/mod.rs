//! Content store.
//!
//! Holds the read-only catalog of topics and the static display
//! resources that travel with it. A [`Catalog`] can only be built
//! through [`Catalog::new`], which enforces the content invariants,
//! so every catalog in the process is known to be valid.

mod loader;
mod validator;

pub use loader::{builtin, load_content, parse_json, parse_toml, ContentFormat};
pub use validator::{validate_topic, validate_topics};

use crate::core::error::{HubError, Result};
use crate::core::types::{Resources, Topic};

/// Validated, immutable topic collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Build a catalog, failing on the first invariant violation
    pub fn new(topics: Vec<Topic>) -> Result<Self> {
        validate_topics(&topics)?;

        if topics.is_empty() {
            tracing::warn!("Catalog has no topics; search will never match");
        }

        Ok(Self { topics })
    }

    /// Topics in declaration order
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    /// Look up a topic by key
    pub fn topic(&self, key: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.key == key)
    }

    /// Look up a topic by key, reporting a missing key as an error
    pub fn get(&self, key: &str) -> Result<&Topic> {
        self.topic(key)
            .ok_or_else(|| HubError::TopicNotFound(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Total number of search entries the catalog flattens into
    pub fn entry_count(&self) -> usize {
        self.topics.iter().map(Topic::entry_count).sum()
    }
}

/// Everything a content file provides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubContent {
    pub catalog: Catalog,
    pub resources: Resources,
}
