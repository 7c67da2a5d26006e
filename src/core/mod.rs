//! Core domain logic (adapter-agnostic)
//!
//! This module contains all content and search logic, independent of
//! how results are displayed.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Content and search entry data structures
//! - **xdg**: XDG directory handling
//! - **catalog**: Content loading and invariant checks
//! - **search**: Flattening and substring search
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{HubError, Result};
pub use services::Services;
