//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! NavigationTarget (path, or name + params)
//!     → RouteTable (resolve)
//!     → History (push / replace)
//!     → ViewRegistry (render resolved view with bindings)
//!     → Navigated
//! ```
//!
//! # Design Decisions
//! - Built explicitly by the entry point; no global router instance
//! - Every route's view must be registered before the first navigation
//! - Navigating to the current location is reported, not repeated

pub mod navigator;
pub mod target;

pub use navigator::{Navigated, NavigationError, Navigator};
pub use target::NavigationTarget;
