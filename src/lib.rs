//! Route table resolution for the recipe single-page application.
//!
//! Maps navigation targets (a path, or a route name plus parameters) to a
//! view handle and the parameters extracted from the path.

pub mod config;
pub mod history;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod views;

pub use config::RouterConfig;
pub use history::{History, MemoryHistory};
pub use navigation::{NavigationTarget, Navigator};
pub use routing::{Resolution, ResolveError, RouteParams, RouteTable};
pub use views::{View, ViewHandle, ViewRegistry};
