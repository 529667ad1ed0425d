//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (pattern syntax, unique names, base path)
//!     → RouterConfig (validated, immutable)
//!     → RouteTable::from_config / MemoryHistory::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never changes at runtime
//! - All sections have defaults; the default route table is the recipe app's
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::HistoryConfig;
pub use schema::LogFormat;
pub use schema::LoggingConfig;
pub use schema::RouteConfig;
pub use schema::RouterConfig;
