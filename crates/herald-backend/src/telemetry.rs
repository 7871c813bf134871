//! Prometheus metrics for the HTTP API.

use metrics::counter;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use herald::log;

/// Requests served, labelled by `route`.
pub const REQUESTS_TOTAL: &str = "herald_requests_total";

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Failed to install Prometheus recorder: {0}")]
    Install(#[from] BuildError),
}

/// Installs the process-wide Prometheus recorder. Call once at startup.
pub fn install() -> Result<PrometheusHandle, MetricsError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    log::debug!("Prometheus recorder installed");
    Ok(handle)
}

pub fn record_request(route: &'static str) {
    counter!(REQUESTS_TOTAL, "route" => route).increment(1);
}
