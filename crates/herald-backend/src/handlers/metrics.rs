use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse};

/// Handle the `/metrics` route in the Prometheus text format
pub async fn get(State(state): State<Arc<crate::AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
