//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target (path string, or name + params)
//!     → location.rs (split path / query / hash, normalize)
//!     → router.rs (ordered table scan, or name index lookup)
//!     → matcher.rs (segment-by-segment pattern match / path build)
//!     → Return: Resolution or ResolveError
//!
//! Table Compilation (at startup):
//!     RouteConfig[]
//!     → config::validation (patterns well-formed, names unique)
//!     → Parse patterns, index names
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable afterwards
//! - No regex: literal and parameter segments only
//! - Deterministic: same input always resolves to the same route
//! - First match wins (declaration order)

pub mod error;
pub mod location;
pub mod matcher;
pub mod router;

use std::collections::BTreeMap;

/// Parameter bindings, keyed by parameter name.
pub type RouteParams = BTreeMap<String, String>;

pub use error::ResolveError;
pub use location::Location;
pub use matcher::{PathPattern, PatternError, Segment};
pub use router::{Resolution, RouteEntry, RouteTable};
