//! Route table and resolution.
//!
//! # Responsibilities
//! - Store validated routes in declaration order
//! - Resolve a path to the first matching route
//! - Resolve a route name plus parameters to a concrete path
//!
//! # Design Decisions
//! - Immutable after construction (shareable without locks)
//! - O(1) name lookup via HashMap
//! - O(n) pattern scan (acceptable for typical route counts)
//! - Explicit NoMatch rather than a silent fallback route

use std::collections::HashMap;

use serde::Serialize;

use crate::config::validation::{validate_routes, ValidationError};
use crate::config::RouteConfig;
use crate::observability::metrics;
use crate::routing::location::{encode_path, Location};
use crate::routing::matcher::{PathPattern, Segment};
use crate::routing::{ResolveError, RouteParams};
use crate::views::ViewHandle;

/// One declared mapping from a pattern to a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    path: PathPattern,
    name: Option<String>,
    component: ViewHandle,
}

impl RouteEntry {
    pub fn pattern(&self) -> &PathPattern {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Handle of the view rendered for this route.
    pub fn component(&self) -> &ViewHandle {
        &self.component
    }

    /// Name if declared, pattern otherwise. Used in errors and logs.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or_else(|| self.path.as_str())
    }
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    /// The matched entry, borrowed from the table.
    pub route: &'a RouteEntry,
    /// Concrete path (normalized input, or the path built from a name).
    pub path: String,
    /// Parameter bindings.
    pub params: RouteParams,
}

/// Ordered, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    names: HashMap<String, usize>,
}

impl RouteTable {
    /// Validate route declarations and freeze them into a table.
    ///
    /// Every problem found is reported, not only the first.
    pub fn from_config(routes: &[RouteConfig]) -> Result<Self, Vec<ValidationError>> {
        let patterns = validate_routes(routes)?;

        let mut entries = Vec::with_capacity(routes.len());
        let mut names = HashMap::new();
        for (index, (route, path)) in routes.iter().zip(patterns).enumerate() {
            if let Some(name) = &route.name {
                names.insert(name.clone(), index);
            }
            entries.push(RouteEntry {
                path,
                name: route.name.clone(),
                component: ViewHandle::new(route.component.clone()),
            });
        }

        tracing::info!(routes = entries.len(), "Route table built");
        metrics::set_route_count(entries.len());

        Ok(Self { entries, names })
    }

    /// Entries in declaration (precedence) order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.names.get(name).map(|&index| &self.entries[index])
    }

    /// Resolve an absolute path such as `/recipe/42`.
    ///
    /// Query and hash, if present, are ignored for matching.
    pub fn resolve_by_path(&self, path: &str) -> Result<Resolution<'_>, ResolveError> {
        let result = Location::parse(path).and_then(|location| self.resolve_location(&location));
        record("path", path, &result);
        result
    }

    /// Resolve a parsed location. First entry in declaration order wins.
    pub fn resolve_location(&self, location: &Location) -> Result<Resolution<'_>, ResolveError> {
        let segments = location.segments();
        self.entries
            .iter()
            .find_map(|route| {
                route.path.matches(&segments).map(|params| Resolution {
                    route,
                    path: location.path().to_string(),
                    params,
                })
            })
            .ok_or_else(|| ResolveError::NoMatch {
                path: location.path().to_string(),
            })
    }

    /// Resolve a named route, substituting `params` into its pattern.
    ///
    /// Supplied parameters the pattern does not declare are discarded.
    pub fn resolve_by_name(
        &self,
        name: &str,
        params: &RouteParams,
    ) -> Result<Resolution<'_>, ResolveError> {
        let result = self.build_named(name, params);
        record("name", name, &result);
        result
    }

    fn build_named(&self, name: &str, params: &RouteParams) -> Result<Resolution<'_>, ResolveError> {
        let route = self.get(name).ok_or_else(|| ResolveError::UnknownRouteName {
            name: name.to_string(),
        })?;

        let mut used = RouteParams::new();
        let mut values = Vec::with_capacity(route.path.segments().len());
        for segment in route.path.segments() {
            match segment {
                Segment::Literal(text) => values.push(text.as_str()),
                Segment::Param(param) => {
                    let value = params
                        .get(param)
                        .filter(|v| !v.is_empty())
                        .ok_or_else(|| ResolveError::MissingParameter {
                            route: name.to_string(),
                            param: param.clone(),
                        })?;
                    // `url` drops dot segments, which would shorten the path.
                    if value == "." || value == ".." {
                        return Err(ResolveError::InvalidParameter {
                            route: name.to_string(),
                            param: param.clone(),
                            value: value.clone(),
                        });
                    }
                    used.insert(param.clone(), value.clone());
                    values.push(value.as_str());
                }
            }
        }

        let extra: Vec<&str> = params
            .keys()
            .filter(|k| !used.contains_key(*k))
            .map(String::as_str)
            .collect();
        if !extra.is_empty() {
            tracing::debug!(route = %name, discarded = ?extra, "Discarding undeclared parameters");
        }

        let path = encode_path(values).ok_or_else(|| ResolveError::InvalidPath {
            path: route.path.as_str().to_string(),
        })?;

        Ok(Resolution {
            route,
            path,
            params: used,
        })
    }
}

fn record(method: &'static str, input: &str, result: &Result<Resolution<'_>, ResolveError>) {
    match result {
        Ok(resolution) => {
            tracing::debug!(
                method,
                input,
                route = %resolution.route.label(),
                path = %resolution.path,
                "Resolved"
            );
            metrics::record_resolution(method, "ok");
        }
        Err(e) => {
            tracing::debug!(method, input, error = %e, "Resolution failed");
            metrics::record_resolution(method, e.kind());
        }
    }
}
