// Test helper functions

use resource_hub::core::catalog::{Catalog, HubContent};
use resource_hub::core::config::Config;
use resource_hub::core::search::SearchHits;
use resource_hub::core::services::Services;
use resource_hub::core::types::Resources;
use std::sync::Arc;

/// Services over the built-in content with default config
#[allow(dead_code)]
pub fn builtin_services() -> Arc<Services> {
    Arc::new(Services::new(Config::default()).expect("built-in content loads"))
}

/// Services over a synthetic catalog with default config
#[allow(dead_code)]
pub fn services_for(catalog: Catalog) -> Arc<Services> {
    let content = HubContent {
        catalog,
        resources: Resources::default(),
    };
    Arc::new(Services::with_content(Config::default(), content))
}

/// Owned titles of a hit list, for comparisons
#[allow(dead_code)]
pub fn titles(hits: &SearchHits<'_>) -> Vec<String> {
    hits.entries.iter().map(|e| e.title.clone()).collect()
}
