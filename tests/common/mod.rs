//! Shared fixtures for integration tests.

use std::sync::Arc;

use recipe_router::{MemoryHistory, Navigator, RouteParams, RouteTable, RouterConfig, ViewRegistry};

/// Route table of the recipe application.
pub fn recipe_table() -> RouteTable {
    RouteTable::from_config(&RouterConfig::default().routes).unwrap()
}

/// Navigator over the recipe table, mounted under `base`.
#[allow(dead_code)]
pub fn recipe_navigator(base: &str) -> Navigator {
    Navigator::new(
        Arc::new(recipe_table()),
        Arc::new(ViewRegistry::with_recipe_views()),
        MemoryHistory::new(base),
    )
    .unwrap()
}

/// Build parameters from pairs.
#[allow(dead_code)]
pub fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
