// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{
    example_catalog, kits_catalog, mixed_catalog, write_content_file, MINIMAL_CONTENT,
};
#[allow(unused_imports)]
pub use helpers::{builtin_services, services_for, titles};
