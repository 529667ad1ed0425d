//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Parse every route pattern and check it is well-formed
//! - Check route names are unique and non-empty
//! - Check the history base is an absolute path
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashMap;

use thiserror::Error;

use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::{PathPattern, PatternError};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} `{path}`: {source}")]
    InvalidPattern {
        index: usize,
        path: String,
        source: PatternError,
    },

    #[error("route name `{name}` is declared by routes #{first} and #{second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("route #{index} has an empty name")]
    EmptyName { index: usize },

    #[error("route #{index} `{path}` has an empty component handle")]
    EmptyComponent { index: usize, path: String },

    #[error("history base `{0}` must begin with `/`")]
    InvalidBase(String),
}

/// Validate the whole configuration.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = match validate_routes(&config.routes) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    };

    if !config.history.base.starts_with('/') {
        errors.push(ValidationError::InvalidBase(config.history.base.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate route declarations, returning their parsed patterns in order.
pub fn validate_routes(routes: &[RouteConfig]) -> Result<Vec<PathPattern>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut patterns = Vec::with_capacity(routes.len());
    let mut names: HashMap<&str, usize> = HashMap::new();

    for (index, route) in routes.iter().enumerate() {
        match PathPattern::parse(&route.path) {
            Ok(pattern) => patterns.push(pattern),
            Err(source) => errors.push(ValidationError::InvalidPattern {
                index,
                path: route.path.clone(),
                source,
            }),
        }

        if let Some(name) = route.name.as_deref() {
            if name.is_empty() {
                errors.push(ValidationError::EmptyName { index });
            } else if let Some(&first) = names.get(name) {
                errors.push(ValidationError::DuplicateName {
                    name: name.to_string(),
                    first,
                    second: index,
                });
            } else {
                names.insert(name, index);
            }
        }

        if route.component.trim().is_empty() {
            errors.push(ValidationError::EmptyComponent {
                index,
                path: route.path.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(patterns)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&RouterConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_names() {
        let routes = vec![
            RouteConfig::new("/", Some("home"), "home"),
            RouteConfig::new("/start", Some("home"), "home"),
        ];
        let errors = validate_routes(&routes).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateName {
                name: "home".into(),
                first: 0,
                second: 1
            }]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let routes = vec![
            RouteConfig::new("recipe/:id", Some("recipe"), "detail"),
            RouteConfig::new("/x/:id/:id", Some(""), " "),
        ];
        let errors = validate_routes(&routes).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(matches!(
            errors[0],
            ValidationError::InvalidPattern {
                index: 0,
                source: PatternError::MissingLeadingSlash,
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_base() {
        let mut config = RouterConfig::default();
        config.history.base = "cookbook".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::InvalidBase("cookbook".into())]);
    }

    #[test]
    fn test_error_display() {
        let err = ValidationError::InvalidPattern {
            index: 1,
            path: "/a/".into(),
            source: PatternError::TrailingSlash,
        };
        assert_eq!(err.to_string(), "route #1 `/a/`: pattern ends with `/`");
    }
}
