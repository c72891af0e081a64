//! Metrics collection and exposition.
//!
//! # Metrics
//! - `vanity_requests_total` (counter): requests by resolution outcome
//! - `vanity_request_duration_seconds` (histogram): handler latency
//! - `vanity_routes` (gauge): entries in the active route table
//! - `vanity_config_reloads_total` (counter): reloads by result
//!
//! Without an installed exporter every call here is a no-op.

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// How a vanity request was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Matched,
    Index,
    NotFound,
    RenderError,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Matched => "matched",
            Outcome::Index => "index",
            Outcome::NotFound => "not_found",
            Outcome::RenderError => "render_error",
        }
    }
}

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

pub fn record_request(outcome: Outcome, start: Instant) {
    counter!("vanity_requests_total", "outcome" => outcome.as_str()).increment(1);
    histogram!("vanity_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

pub fn set_route_count(routes: usize) {
    gauge!("vanity_routes").set(routes as f64);
}

pub fn record_reload(success: bool) {
    let result = if success { "success" } else { "failure" };
    counter!("vanity_config_reloads_total", "result" => result).increment(1);
}
