//! Metrics collection and exposition.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by method (`path`/`name`) and outcome
//! - `router_navigations_total` (counter): navigations by outcome
//! - `router_routes` (gauge): routes in the active table
//!
//! # Design Decisions
//! - Outcome labels come from the error's `kind()`, so cardinality stays fixed
//! - The Prometheus recorder is opt-in and installed by the binary

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

pub fn record_resolution(method: &'static str, outcome: &'static str) {
    ::metrics::counter!("router_resolutions_total", "method" => method, "outcome" => outcome)
        .increment(1);
}

pub fn record_navigation(outcome: &'static str) {
    ::metrics::counter!("router_navigations_total", "outcome" => outcome).increment(1);
}

pub fn set_route_count(routes: usize) {
    ::metrics::gauge!("router_routes").set(routes as f64);
}

/// Install a Prometheus recorder and return the handle used to render it.
pub fn install_prometheus() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}
