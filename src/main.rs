//! musician-directory server entry point.
//!
//! Loads configuration, bootstraps the feedback table, and serves HTTP.

use std::sync::Arc;

use anyhow::Context;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use musician_directory::api;
use musician_directory::app_state::AppState;
use musician_directory::config::AppConfig;
use musician_directory::persistence::MySqlFeedbackStore;
use musician_directory::service::FeedbackService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration before logging so LOG_FORMAT can take effect
    let config = AppConfig::from_env().context("invalid configuration")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    tracing::info!(
        addr = %config.listen_addr,
        db_host = %config.database.host,
        db_name = %config.database.name,
        "starting musician-directory"
    );

    // Build persistence and service layers
    let store = Arc::new(MySqlFeedbackStore::connect_lazy(&config.database));
    let feedback_service = Arc::new(FeedbackService::new(store));
    feedback_service.initialize().await;

    // Build router
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(feedback_service));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
