//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Routing, navigation, config loading produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//!
//! Consumers:
//!     → stderr (pretty or JSON)
//!     → Prometheus text exposition (CLI `--metrics`)
//! ```
//!
//! # Design Decisions
//! - Library code only emits; the entry point installs subscribers/recorders
//! - Without a recorder installed, metric updates are no-ops

pub mod logging;
pub mod metrics;
