//! Catalog invariant checks.
//!
//! Every topic must carry at least one section or FAQ, every section
//! must carry at least one paragraph, and topic keys must be unique.
//! The first violation found is returned; nothing is repaired.

use crate::core::error::{HubError, Result};
use crate::core::types::Topic;
use std::collections::HashSet;

/// Validate a full topic list in declaration order
pub fn validate_topics(topics: &[Topic]) -> Result<()> {
    let mut seen = HashSet::with_capacity(topics.len());

    for topic in topics {
        if !seen.insert(topic.key.as_str()) {
            return Err(HubError::invariant(&topic.key, "duplicate topic key"));
        }
        validate_topic(topic)?;
    }

    Ok(())
}

/// Validate a single topic
pub fn validate_topic(topic: &Topic) -> Result<()> {
    if topic.sections.is_empty() && topic.faqs.is_empty() {
        return Err(HubError::invariant(
            &topic.key,
            "topic has neither sections nor faqs",
        ));
    }

    if let Some(section) = topic.sections.iter().find(|s| s.paragraphs.is_empty()) {
        return Err(HubError::invariant(
            &topic.key,
            format!("section '{}' has no paragraphs", section.heading),
        ));
    }

    Ok(())
}
