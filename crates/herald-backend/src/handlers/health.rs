use std::sync::Arc;

use axum::{Json, extract::State};
use herald::data::{HealthResponse, HealthStatus, UptimeInfo};
use herald::log;

use crate::telemetry::record_request;

fn human_readable_uptime(uptime_seconds: i64) -> String {
    let days = uptime_seconds / 86400;
    let hours = (uptime_seconds % 86400) / 3600;
    let minutes = (uptime_seconds % 3600) / 60;
    let secs = uptime_seconds % 60;

    if days > 0 {
        format!("{days}d {hours}h {minutes}m {secs}s")
    } else if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn service_uptime(
    started_at: chrono::DateTime<chrono::Utc>,
    now: chrono::DateTime<chrono::Utc>,
) -> UptimeInfo {
    let seconds = (now - started_at).num_seconds().max(0);
    UptimeInfo {
        seconds,
        human: human_readable_uptime(seconds),
    }
}

pub async fn get(State(state): State<Arc<crate::AppState>>) -> Json<HealthResponse> {
    record_request("/api/health");
    let now = chrono::Utc::now();

    let health_response = HealthResponse {
        status: HealthStatus::Ok,
        timestamp: now.to_rfc3339(),
        started_at: state.started_at.to_rfc3339(),
        uptime: service_uptime(state.started_at, now),
    };

    log::info!("Health check: {:?}", health_response);

    Json(health_response)
}
