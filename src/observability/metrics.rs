//! Metrics collection and exposition.
//!
//! # Metrics
//! - `http_requests_total` (counter): requests by method, route, status
//! - `http_request_duration_seconds` (histogram): latency distribution
//! - `temperature_conversions_total` (counter): conversions by direction, outcome
//!
//! # Design Decisions
//! - Metric updates are no-ops until a recorder is installed, so tests and
//!   deployments without `metrics_enabled` pay nothing
//! - Labels use the matched route template, never the raw path

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::conversion::{Direction, InvalidTemperature};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record a finished HTTP request.
pub fn record_request(method: &str, route: &str, status: u16, start: Instant) {
    metrics::counter!(
        "http_requests_total",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "http_request_duration_seconds",
        "method" => method.to_string(),
        "route" => route.to_string(),
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of a conversion attempt.
pub fn record_conversion<T>(direction: Direction, outcome: &Result<T, InvalidTemperature>) {
    let outcome = match outcome {
        Ok(_) => "success",
        Err(err) => err.kind().as_str(),
    };
    metrics::counter!(
        "temperature_conversions_total",
        "direction" => direction.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}
