//! Error types and error handling for the resource hub.
//!
//! This module defines the error types used throughout the
//! application. Searching never produces an error; everything here
//! is raised while loading configuration or content, or by adapters
//! looking up content that does not exist.

use thiserror::Error;

/// Result type alias for resource hub operations
pub type Result<T> = std::result::Result<T, HubError>;

/// Main error type for the resource hub
#[derive(Error, Debug)]
pub enum HubError {
    #[error("Catalog invariant violated in topic '{topic}': {reason}")]
    CatalogInvariantViolation { topic: String, reason: String },

    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Content parse error: {0}")]
    ContentParse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl HubError {
    /// Shorthand for building an invariant violation
    pub fn invariant(topic: impl Into<String>, reason: impl Into<String>) -> Self {
        HubError::CatalogInvariantViolation {
            topic: topic.into(),
            reason: reason.into(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, HubError::TopicNotFound(_))
    }

    /// Check if the authored content itself is unusable
    pub fn is_invalid_content(&self) -> bool {
        matches!(
            self,
            HubError::CatalogInvariantViolation { .. }
                | HubError::ContentParse(_)
                | HubError::SerdeError(_)
                | HubError::TomlError(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, HubError::ConfigError(_))
    }
}
