//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod browse;
pub mod completions;
pub mod config;
pub mod info;
pub mod resources;
pub mod search;
pub mod topics;
pub mod validate;

// Re-export argument types for use in mod.rs
pub use browse::BrowseArgs;
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use info::InfoArgs;
pub use resources::ResourcesArgs;
pub use search::SearchArgs;
pub use validate::ValidateArgs;
