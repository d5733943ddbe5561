//! Metrics collection and exposition.
//!
//! # Metrics
//! - `frontend_requests_total` (counter): requests by method and status
//! - `frontend_request_duration_seconds` (histogram): page latency
//!
//! # Design Decisions
//! - Prometheus exporter on its own listener, enabled via config
//! - Low-overhead updates; labels limited to method and status

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter. Must run inside the Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "failed to install metrics exporter"),
    }
}

/// Record one completed page request.
pub fn record_page_request(method: &str, status: u16, start: Instant) {
    counter!(
        "frontend_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
    )
    .increment(1);
    histogram!("frontend_request_duration_seconds").record(start.elapsed().as_secs_f64());
}
