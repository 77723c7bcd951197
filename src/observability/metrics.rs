//! Metrics collection and exposition.
//!
//! # Metrics
//! - `shell_renders_total` (counter): pages served by view and status
//! - `shell_render_duration_seconds` (histogram): render latency
//!
//! # Design Decisions
//! - Recording is a no-op until a recorder is installed
//! - Prometheus exporter only when enabled in config

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint. Needs a running tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint started"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one served page.
pub fn record_render(view: &str, status: u16, start: Instant) {
    let status = status.to_string();
    counter!("shell_renders_total", "view" => view.to_string(), "status" => status.clone())
        .increment(1);
    histogram!("shell_render_duration_seconds", "view" => view.to_string(), "status" => status)
        .record(start.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_recorder_is_noop() {
        record_render("Main", 200, Instant::now());
    }
}
