use std::error::Error;
use std::sync::Arc;

use todo_core::app::TodoAdapter;
use todo_core::impls::{InMemoryTodoRepository, TracingAuditLogger};
use todo_server::config::AppConfig;
use todo_server::routes::map_routes;
use todo_server::state::AppState;
use todo_server::telemetry;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let loaded = AppConfig::from_env();
    let config = loaded.clone().unwrap_or_default();
    telemetry::init(config.is_production());

    if let Err(err) = loaded {
        tracing::warn!(error = %err, "failed to load configuration, using defaults");
    }
    tracing::info!(
        app = %config.app_name,
        env = %config.app_env,
        host = %config.app_host,
        port = config.app_port,
        "configuration loaded"
    );

    let adapter = TodoAdapter::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(TracingAuditLogger),
    );
    let state = Arc::new(AppState { adapter });

    let app = map_routes(state).layer(TraceLayer::new_for_http());

    let bind_address = config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("{} listening on http://{bind_address}", config.app_name);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} stopped", config.app_name);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
