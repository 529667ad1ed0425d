//! View registry.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     entry point registers views under handles
//!     → ViewRegistry (handle → Arc<dyn View>)
//!     → shared via Arc with the Navigator
//!
//! Navigation:
//!     Resolution.route.component (ViewHandle)
//!     → registry lookup
//!     → View::render(params)
//! ```
//!
//! # Design Decisions
//! - The route table only holds handles; the registry owns the views
//! - Any type implementing `View` can be registered
//! - Registration happens once at startup; the registry is read-only afterwards

pub mod recipe;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::routing::RouteParams;

/// Opaque key identifying a registered view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewHandle(String);

impl ViewHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewHandle {
    fn from(handle: &str) -> Self {
        Self::new(handle)
    }
}

/// A renderable unit mounted when its route is resolved.
pub trait View: Send + Sync + fmt::Debug {
    /// Render the view for the given parameter bindings.
    fn render(&self, params: &RouteParams) -> String;
}

/// Views keyed by handle.
#[derive(Debug, Default)]
pub struct ViewRegistry {
    views: HashMap<ViewHandle, Arc<dyn View>>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the recipe application's views.
    pub fn with_recipe_views() -> Self {
        let mut registry = Self::new();
        registry.register(recipe::HOME, recipe::HomeView);
        registry.register(recipe::RECIPE_DETAIL, recipe::RecipeDetailView);
        registry
    }

    /// Register a view, returning the one it replaced, if any.
    pub fn register<V>(&mut self, handle: impl Into<ViewHandle>, view: V) -> Option<Arc<dyn View>>
    where
        V: View + 'static,
    {
        let handle = handle.into();
        tracing::debug!(handle = %handle, "Registering view");
        self.views.insert(handle, Arc::new(view))
    }

    pub fn get(&self, handle: &ViewHandle) -> Option<&Arc<dyn View>> {
        self.views.get(handle)
    }

    pub fn contains(&self, handle: &ViewHandle) -> bool {
        self.views.contains_key(handle)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Static(&'static str);

    impl View for Static {
        fn render(&self, _params: &RouteParams) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_register_and_render() {
        let mut registry = ViewRegistry::new();
        assert!(registry.register("about", Static("About")).is_none());

        let handle = ViewHandle::new("about");
        let view = registry.get(&handle).unwrap();
        assert_eq!(view.render(&RouteParams::new()), "About");
        assert!(!registry.contains(&ViewHandle::new("missing")));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ViewRegistry::new();
        registry.register("about", Static("old"));
        let replaced = registry.register("about", Static("new")).unwrap();
        assert_eq!(replaced.render(&RouteParams::new()), "old");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_recipe_views_registered() {
        let registry = ViewRegistry::with_recipe_views();
        assert!(registry.contains(&ViewHandle::new(recipe::HOME)));
        assert!(registry.contains(&ViewHandle::new(recipe::RECIPE_DETAIL)));
    }
}
