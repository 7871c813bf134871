use std::sync::Arc;

use tokio::signal;

use herald::errors::Report;
use herald::log;

use metrics_exporter_prometheus::PrometheusHandle;

mod handlers;
mod routes;
mod settings;
mod telemetry;

use settings::Settings;

/// State shared by all request handlers.
pub struct AppState {
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub metrics: PrometheusHandle,
}

impl AppState {
    pub fn new(metrics: PrometheusHandle) -> Self {
        Self {
            started_at: chrono::Utc::now(),
            metrics,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    herald::log::setup()?;

    let settings = Settings::load()?;
    let metrics = telemetry::install()?;
    let state = Arc::new(AppState::new(metrics));
    let app = routes::setup_routes(state);

    let listener = tokio::net::TcpListener::bind(settings.server.address()).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Signal received, starting graceful shutdown");
}
