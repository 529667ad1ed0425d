//! Resolution errors.

use thiserror::Error;

/// Why a navigation target could not be resolved to a route.
///
/// Every variant is local to the call that produced it; the table itself
/// is never left in a failed state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No declared pattern matches the path.
    #[error("no route matches path `{path}`")]
    NoMatch { path: String },

    /// No route is declared under this name.
    #[error("no route named `{name}`")]
    UnknownRouteName { name: String },

    /// A parameter the pattern declares was not supplied (or was empty).
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParameter { route: String, param: String },

    /// A supplied parameter value cannot stand as a single path segment.
    #[error("route `{route}` cannot use `{value}` for parameter `{param}`")]
    InvalidParameter {
        route: String,
        param: String,
        value: String,
    },

    /// The target is not an absolute path.
    #[error("navigation target `{path}` must begin with `/`")]
    InvalidPath { path: String },
}

impl ResolveError {
    /// Short label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::NoMatch { .. } => "no_match",
            ResolveError::UnknownRouteName { .. } => "unknown_name",
            ResolveError::MissingParameter { .. } => "missing_parameter",
            ResolveError::InvalidParameter { .. } => "invalid_parameter",
            ResolveError::InvalidPath { .. } => "invalid_path",
        }
    }
}
