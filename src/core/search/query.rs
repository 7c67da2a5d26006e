//! Query handling for the search box.
//!
//! Queries are only case-folded; there is no trimming, tokenisation or
//! escaping. Whether to search at all is the caller's decision: a
//! blank query means no search is performed, which [`SearchBox`]
//! reports as `None` rather than as an empty result list.

use super::index::{SearchHits, SearchIndex, DEFAULT_MAX_RESULTS};

/// Case-fold text for matching
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// True for the empty string and whitespace-only input
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Owner of the current query string.
///
/// Each call to [`SearchBox::set_query`] corresponds to one change
/// event in the search field; [`SearchBox::results`] re-evaluates the
/// query synchronously against the shared index.
#[derive(Debug, Clone)]
pub struct SearchBox<'a> {
    index: &'a SearchIndex,
    query: String,
    limit: usize,
}

impl<'a> SearchBox<'a> {
    pub fn new(index: &'a SearchIndex) -> Self {
        Self::with_limit(index, DEFAULT_MAX_RESULTS)
    }

    pub fn with_limit(index: &'a SearchIndex, limit: usize) -> Self {
        Self {
            index,
            query: String::new(),
            limit,
        }
    }

    /// Replace the current query
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the current query triggers a search
    pub fn is_active(&self) -> bool {
        !is_blank(&self.query)
    }

    /// Matches for the current query, or `None` when no search runs
    pub fn results(&self) -> Option<SearchHits<'a>> {
        if !self.is_active() {
            return None;
        }
        Some(self.index.search_with_limit(&self.query, self.limit))
    }
}
