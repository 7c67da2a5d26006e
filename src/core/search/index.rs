//! Flattened search index.
//!
//! The catalog is flattened once into [`SearchEntry`] records in a
//! fixed order: topics in declaration order, and within a topic every
//! section entry before every FAQ entry. Queries are a linear,
//! case-insensitive substring scan over that list, so results always
//! come back in build order and there is no scoring.

use super::query::fold_case;
use crate::core::catalog::Catalog;
use crate::core::types::SearchEntry;

/// Result cap applied by [`SearchIndex::search`]
pub const DEFAULT_MAX_RESULTS: usize = 8;

/// Separator between the topic label and the section heading or question
pub const TITLE_SEPARATOR: &str = " — ";

/// Flatten a catalog into search entries.
///
/// Section text is the paragraphs joined with a single space. Calling
/// this twice on the same catalog yields identical output.
pub fn flatten(catalog: &Catalog) -> Vec<SearchEntry> {
    let mut entries = Vec::with_capacity(catalog.entry_count());

    for topic in catalog.topics() {
        for section in &topic.sections {
            entries.push(SearchEntry {
                title: format!("{}{TITLE_SEPARATOR}{}", topic.label, section.heading),
                text: section.paragraphs.join(" "),
                topic_key: topic.key.clone(),
            });
        }
        for faq in &topic.faqs {
            entries.push(SearchEntry {
                title: format!("{}{TITLE_SEPARATOR}{}", topic.label, faq.question),
                text: faq.answer.clone(),
                topic_key: topic.key.clone(),
            });
        }
    }

    entries
}

/// Matches for one query, in build order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHits<'a> {
    /// Matching entries, at most the requested limit
    pub entries: Vec<&'a SearchEntry>,

    /// Number of entries that matched before truncation
    pub total_matches: usize,
}

impl<'a> SearchHits<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when matches were dropped by the result cap
    pub fn is_truncated(&self) -> bool {
        self.total_matches > self.entries.len()
    }

    /// Titles of the returned entries
    pub fn titles(&self) -> Vec<&'a str> {
        self.entries.iter().map(|e| e.title.as_str()).collect()
    }
}

/// Read-only index built once from a catalog
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,

    // Case-folded `title + text`, parallel to `entries`
    haystacks: Vec<String>,
}

impl SearchIndex {
    /// Flatten the catalog and precompute the case-folded haystacks
    pub fn build(catalog: &Catalog) -> Self {
        let index = Self::from_entries(flatten(catalog));
        tracing::debug!(
            "Built search index: {} entries from {} topics",
            index.len(),
            catalog.len()
        );
        index
    }

    /// Index an already-flattened entry list as-is
    pub fn from_entries(entries: Vec<SearchEntry>) -> Self {
        let haystacks = entries
            .iter()
            .map(|e| fold_case(&format!("{}{}", e.title, e.text)))
            .collect();

        Self { entries, haystacks }
    }

    /// All entries in build order
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Search with the default cap of [`DEFAULT_MAX_RESULTS`]
    pub fn search(&self, query: &str) -> SearchHits<'_> {
        self.search_with_limit(query, DEFAULT_MAX_RESULTS)
    }

    /// Case-insensitive substring search keeping the first `limit` matches.
    ///
    /// Never fails. The empty string is a substring of every entry and
    /// therefore matches all of them.
    pub fn search_with_limit(&self, query: &str, limit: usize) -> SearchHits<'_> {
        let needle = fold_case(query);

        let mut entries = Vec::with_capacity(limit.min(self.entries.len()));
        let mut total_matches = 0;

        for (entry, haystack) in self.entries.iter().zip(&self.haystacks) {
            if haystack.contains(needle.as_str()) {
                total_matches += 1;
                if entries.len() < limit {
                    entries.push(entry);
                }
            }
        }

        tracing::trace!(
            "Query {:?} matched {} entries, returning {}",
            query,
            total_matches,
            entries.len()
        );

        SearchHits {
            entries,
            total_matches,
        }
    }
}
