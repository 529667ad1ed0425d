//! Navigator: resolves targets, records history, renders views.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::history::{History, MemoryHistory};
use crate::navigation::NavigationTarget;
use crate::observability::metrics;
use crate::routing::{Location, Resolution, ResolveError, RouteParams, RouteTable};
use crate::views::{ViewHandle, ViewRegistry};

/// Why a navigation did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The target resolves to the current route, params, query and hash.
    #[error("already at `{location}`")]
    Duplicated { location: String },

    /// A route points at a handle with no registered view.
    #[error("route `{route}` uses unregistered view `{component}`")]
    UnregisteredView { route: String, component: ViewHandle },
}

impl NavigationError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationError::Resolve(e) => e.kind(),
            NavigationError::Duplicated { .. } => "duplicated",
            NavigationError::UnregisteredView { .. } => "unregistered_view",
        }
    }
}

/// A completed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigated {
    /// Route name, if the route has one.
    pub name: Option<String>,
    /// Pattern of the matched route.
    pub route: String,
    pub component: ViewHandle,
    pub path: String,
    pub params: RouteParams,
    pub query: Option<String>,
    pub hash: Option<String>,
    /// Full href including the history base.
    pub href: String,
    /// Rendered view output.
    pub output: String,
}

#[derive(Debug, Clone, Copy)]
enum Mode {
    Push,
    Replace,
}

/// Ties the route table, view registry and history together.
#[derive(Debug)]
pub struct Navigator<H: History = MemoryHistory> {
    table: Arc<RouteTable>,
    views: Arc<ViewRegistry>,
    history: H,
}

impl<H: History> Navigator<H> {
    /// Create a navigator, checking every route's view is registered.
    pub fn new(
        table: Arc<RouteTable>,
        views: Arc<ViewRegistry>,
        history: H,
    ) -> Result<Self, NavigationError> {
        if let Some(entry) = table
            .entries()
            .iter()
            .find(|entry| !views.contains(entry.component()))
        {
            return Err(NavigationError::UnregisteredView {
                route: entry.label().to_string(),
                component: entry.component().clone(),
            });
        }

        Ok(Self {
            table,
            views,
            history,
        })
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Resolve and render the current history location.
    pub fn current(&self) -> Result<Navigated, NavigationError> {
        let location = Location::parse(self.history.location())?;
        self.render(&location)
    }

    /// Navigate to `target`, adding a history entry.
    pub fn push(&mut self, target: impl Into<NavigationTarget>) -> Result<Navigated, NavigationError> {
        self.navigate(target.into(), Mode::Push)
    }

    /// Navigate to `target`, overwriting the current history entry.
    pub fn replace(
        &mut self,
        target: impl Into<NavigationTarget>,
    ) -> Result<Navigated, NavigationError> {
        self.navigate(target.into(), Mode::Replace)
    }

    /// Navigate to an href as it appears in the address bar, base included.
    pub fn push_href(&mut self, href: &str) -> Result<Navigated, NavigationError> {
        let location = self
            .history
            .strip_base(href)
            .ok_or_else(|| ResolveError::NoMatch {
                path: href.to_string(),
            })?;
        self.push(location)
    }

    pub fn back(&mut self) -> Result<Option<Navigated>, NavigationError> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Result<Option<Navigated>, NavigationError> {
        self.go(1)
    }

    /// Move through history. `Ok(None)` when `delta` leaves the stack.
    pub fn go(&mut self, delta: isize) -> Result<Option<Navigated>, NavigationError> {
        if !self.history.go(delta) {
            tracing::debug!(delta, "History boundary reached");
            return Ok(None);
        }
        self.current().map(Some)
    }

    fn navigate(&mut self, target: NavigationTarget, mode: Mode) -> Result<Navigated, NavigationError> {
        let result = self.try_navigate(&target, mode);
        match &result {
            Ok(navigated) => {
                tracing::info!(
                    target_route = %target,
                    mode = ?mode,
                    href = %navigated.href,
                    component = %navigated.component,
                    "Navigated"
                );
                metrics::record_navigation("ok");
            }
            Err(e) => {
                tracing::warn!(target_route = %target, mode = ?mode, error = %e, "Navigation failed");
                metrics::record_navigation(e.kind());
            }
        }
        result
    }

    fn try_navigate(
        &mut self,
        target: &NavigationTarget,
        mode: Mode,
    ) -> Result<Navigated, NavigationError> {
        let location = match target {
            NavigationTarget::Path(path) => Location::parse(path)?,
            NavigationTarget::Named { name, params } => {
                let resolution = self.table.resolve_by_name(name, params)?;
                Location::parse(&resolution.path)?
            }
        };

        // Resolve and render before touching history so failures leave it intact.
        let resolution = self.table.resolve_location(&location)?;
        let full_path = location.full_path();
        if self.is_current(&location, &resolution) {
            return Err(NavigationError::Duplicated {
                location: full_path,
            });
        }

        let navigated = self.render_resolution(&location, resolution)?;
        match mode {
            Mode::Push => self.history.push(full_path),
            Mode::Replace => self.history.replace(full_path),
        }
        Ok(navigated)
    }

    /// Whether `location` lands where history already is. `/recipe/42/`
    /// and `/recipe/p%C3%A3o` count as `/recipe/42` and `/recipe/pão`.
    fn is_current(&self, location: &Location, resolution: &Resolution<'_>) -> bool {
        let Ok(current) = Location::parse(self.history.location()) else {
            return false;
        };
        let Ok(at) = self.table.resolve_location(&current) else {
            return false;
        };
        std::ptr::eq(at.route, resolution.route)
            && at.params == resolution.params
            && current.query() == location.query()
            && current.hash() == location.hash()
    }

    fn render(&self, location: &Location) -> Result<Navigated, NavigationError> {
        let resolution = self.table.resolve_location(location)?;
        self.render_resolution(location, resolution)
    }

    fn render_resolution(
        &self,
        location: &Location,
        resolution: Resolution<'_>,
    ) -> Result<Navigated, NavigationError> {
        let route = resolution.route;
        let view = self
            .views
            .get(route.component())
            .ok_or_else(|| NavigationError::UnregisteredView {
                route: route.label().to_string(),
                component: route.component().clone(),
            })?;

        let output = view.render(&resolution.params);
        Ok(Navigated {
            name: route.name().map(str::to_string),
            route: route.pattern().to_string(),
            component: route.component().clone(),
            path: resolution.path,
            params: resolution.params,
            query: location.query().map(str::to_string),
            hash: location.hash().map(str::to_string),
            href: self.history.create_href(&location.full_path()),
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RouteConfig, RouterConfig};

    fn navigator() -> Navigator {
        let table = RouteTable::from_config(&RouterConfig::default().routes).unwrap();
        Navigator::new(
            Arc::new(table),
            Arc::new(ViewRegistry::with_recipe_views()),
            MemoryHistory::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_push_renders_view() {
        let mut nav = navigator();
        let navigated = nav.push("/recipe/42?tab=steps").unwrap();
        assert_eq!(navigated.name.as_deref(), Some("recipe"));
        assert_eq!(navigated.output, "Recipe 42");
        assert_eq!(navigated.query.as_deref(), Some("tab=steps"));
        assert_eq!(navigated.href, "/recipe/42?tab=steps");
        assert_eq!(nav.history().location(), "/recipe/42?tab=steps");
    }

    #[test]
    fn test_push_named() {
        let mut nav = navigator();
        let navigated = nav
            .push(NavigationTarget::named("recipe").param("id", "7"))
            .unwrap();
        assert_eq!(navigated.path, "/recipe/7");
        assert_eq!(navigated.output, "Recipe 7");
    }

    #[test]
    fn test_failed_navigation_keeps_history() {
        let mut nav = navigator();
        let err = nav.push("/unknown").unwrap_err();
        assert_eq!(err.kind(), "no_match");
        assert_eq!(nav.history().location(), "/");
        assert_eq!(nav.history().len(), 1);
    }

    #[test]
    fn test_duplicated_navigation() {
        let mut nav = navigator();
        assert_eq!(
            nav.push("/"),
            Err(NavigationError::Duplicated {
                location: "/".into()
            })
        );
        nav.push("/recipe/1").unwrap();
        assert!(matches!(
            nav.push(NavigationTarget::named("recipe").param("id", "1")),
            Err(NavigationError::Duplicated { .. })
        ));
    }

    #[test]
    fn test_duplicated_by_resolved_destination() {
        let mut nav = navigator();
        nav.push("/recipe/42").unwrap();
        assert_eq!(
            nav.push("/recipe/42/"),
            Err(NavigationError::Duplicated {
                location: "/recipe/42/".into()
            })
        );

        nav.push("/recipe/pão").unwrap();
        assert!(matches!(
            nav.push("/recipe/p%C3%A3o"),
            Err(NavigationError::Duplicated { .. })
        ));
        assert!(matches!(
            nav.replace(NavigationTarget::named("recipe").param("id", "pão")),
            Err(NavigationError::Duplicated { .. })
        ));
        assert_eq!(nav.history().len(), 3);

        nav.push("/recipe/pão#steps").unwrap();
        assert_eq!(nav.history().len(), 4);
    }

    #[test]
    fn test_back_and_forward() {
        let mut nav = navigator();
        nav.push("/recipe/1").unwrap();
        nav.push("/recipe/2").unwrap();

        let back = nav.back().unwrap().unwrap();
        assert_eq!(back.output, "Recipe 1");
        let home = nav.back().unwrap().unwrap();
        assert_eq!(home.output, "Recipes");
        assert_eq!(nav.back().unwrap(), None);

        let forward = nav.forward().unwrap().unwrap();
        assert_eq!(forward.path, "/recipe/1");
    }

    #[test]
    fn test_replace() {
        let mut nav = navigator();
        nav.push("/recipe/1").unwrap();
        nav.replace("/recipe/2").unwrap();
        assert_eq!(nav.history().len(), 2);
        assert_eq!(nav.back().unwrap().unwrap().output, "Recipes");
    }

    #[test]
    fn test_base_href() {
        let table = RouteTable::from_config(&RouterConfig::default().routes).unwrap();
        let mut nav = Navigator::new(
            Arc::new(table),
            Arc::new(ViewRegistry::with_recipe_views()),
            MemoryHistory::new("/cookbook/"),
        )
        .unwrap();

        let navigated = nav.push_href("/cookbook/recipe/3").unwrap();
        assert_eq!(navigated.href, "/cookbook/recipe/3");
        assert_eq!(navigated.output, "Recipe 3");
        assert!(nav.push_href("/elsewhere/recipe/3").is_err());
    }

    #[test]
    fn test_unregistered_view_rejected() {
        let routes = vec![RouteConfig::new("/about", Some("about"), "about")];
        let table = RouteTable::from_config(&routes).unwrap();
        let err = Navigator::new(
            Arc::new(table),
            Arc::new(ViewRegistry::with_recipe_views()),
            MemoryHistory::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            NavigationError::UnregisteredView {
                route: "about".into(),
                component: ViewHandle::new("about")
            }
        );
    }
}
