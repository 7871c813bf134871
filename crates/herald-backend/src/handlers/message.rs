use axum::Json;

use herald::data::MessagePayload;
use herald::{log, tracing};

use crate::telemetry::record_request;

/// Span name used by the `/trace` route.
pub const TRACE_SPAN_NAME: &str = "custom-span-trace";

/// Handle the `/` route
pub async fn root() -> Json<MessagePayload> {
    log::info!("GET / called");
    record_request("/");
    Json(MessagePayload::new("Hello from Herald backend!"))
}

/// Handle the `/api/message` route, the one the frontend displays
pub async fn get() -> Json<MessagePayload> {
    log::info!("GET /api/message called");
    record_request("/api/message");
    Json(MessagePayload::new("Hello from Herald API"))
}

/// Handle the `/trace` route, which records its work inside a named span
pub async fn trace() -> Json<MessagePayload> {
    record_request("/trace");
    let span = tracing::info_span!(TRACE_SPAN_NAME);
    span.in_scope(|| {
        log::info!("Custom span '{TRACE_SPAN_NAME}' created");
        Json(MessagePayload::new("This route creates a custom trace span!"))
    })
}
