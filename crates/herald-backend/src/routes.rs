use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::handlers;

/// The frontend is served from its own origin, so any origin may call the API.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Setup the routes for the server and configure CORS and request tracing
pub fn setup_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::message::root))
        .route("/trace", get(handlers::message::trace))
        .route("/api/health", get(handlers::health::get))
        .route("/api/message", get(handlers::message::get))
        .route("/metrics", get(handlers::metrics::get))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
