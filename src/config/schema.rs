//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::views::recipe::{HOME, RECIPE_DETAIL};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterConfig {
    /// History settings (base path).
    pub history: HistoryConfig,

    /// Logging settings.
    pub logging: LoggingConfig,

    /// Route declarations, in matching precedence order.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            logging: LoggingConfig::default(),
            routes: vec![
                RouteConfig::new("/", Some("home"), HOME),
                RouteConfig::new("/recipe/:id", Some("recipe"), RECIPE_DETAIL),
            ],
        }
    }
}

/// One route declaration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct RouteConfig {
    /// Path pattern, e.g. `/recipe/:id`.
    pub path: String,

    /// Optional unique name for name-based resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Handle of the view registered for this route.
    pub component: String,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>, name: Option<&str>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.map(str::to_string),
            component: component.into(),
        }
    }
}

/// History configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HistoryConfig {
    /// Path prefix the application is served under (e.g. "/" or "/cookbook/").
    pub base: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "info", "recipe_router=debug").
    pub level: String,

    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
