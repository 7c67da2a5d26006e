//! Search module for the hub's content search.
//!
//! This module flattens the catalog into searchable entries and
//! answers case-insensitive substring queries over them.

mod index;
mod query;

pub use index::{flatten, SearchHits, SearchIndex, DEFAULT_MAX_RESULTS, TITLE_SEPARATOR};
pub use query::{fold_case, is_blank, SearchBox};
