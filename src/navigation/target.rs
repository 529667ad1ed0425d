//! Navigation targets.

use std::fmt;

use crate::routing::RouteParams;

/// Where to navigate: a literal path, or a named route with parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    /// Absolute path, optionally with query and hash.
    Path(String),
    /// Named route plus parameter values.
    Named { name: String, params: RouteParams },
}

impl NavigationTarget {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named {
            name: name.into(),
            params: RouteParams::new(),
        }
    }

    /// Add a parameter to a named target. No effect on path targets.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Self::Named { params, .. } = &mut self {
            params.insert(key.into(), value.into());
        }
        self
    }
}

impl From<&str> for NavigationTarget {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for NavigationTarget {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.write_str(path),
            Self::Named { name, params } => {
                write!(f, "@{name}")?;
                for (key, value) in params {
                    write!(f, ",{key}={value}")?;
                }
                Ok(())
            }
        }
    }
}
