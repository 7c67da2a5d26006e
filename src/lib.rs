//! Resource Hub - HIV self-testing and PrEP information with search
//!
//! An informational hub of HIVST and PrEP content: topics made of
//! sections and FAQs, a handful of static display resources, and a
//! search box backed by a small in-memory substring index.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Domain logic (display-agnostic)
//!   - config, error, types, xdg
//!   - catalog (content loading, invariant checks)
//!   - search (flattening, case-insensitive substring queries)
//!   - services (unified service container)
//!
//! - **cli**: Terminal display layer (depends on core)
//!   - commands, output formatting
//!
//! # Example
//!
//! ```
//! use resource_hub::core::catalog::Catalog;
//! use resource_hub::core::search::SearchIndex;
//! use resource_hub::core::types::{Section, Topic};
//!
//! let catalog = Catalog::new(vec![Topic::with_sections(
//!     "t1",
//!     "HIVST Basics",
//!     vec![Section::new(
//!         "How it works",
//!         &["Oral fluid or finger-prick.", "Wait 15-20 minutes."],
//!     )],
//! )])
//! .unwrap();
//!
//! let index = SearchIndex::build(&catalog);
//! assert_eq!(index.search("FINGER").titles(), vec!["HIVST Basics — How it works"]);
//! assert!(index.search("xyz").is_empty());
//! ```

// Core domain logic
pub mod core;

// Terminal display layer
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::catalog::{Catalog, HubContent};
pub use crate::core::config::Config;
pub use crate::core::error::{HubError, Result};
pub use crate::core::search::{SearchBox, SearchHits, SearchIndex};
pub use crate::core::services::Services;
pub use crate::core::types::*;
