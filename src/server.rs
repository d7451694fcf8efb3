//! HTTP server wiring

use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    api::{build_router, AppState},
    config::Config,
    error::{FoodInfoError, Result},
    shutdown::shutdown_signal,
    usda::UsdaClient,
};

/// Build application state from configuration
pub fn build_state(config: &Config) -> Result<AppState> {
    let client = UsdaClient::new(&config.usda)?;
    let api_key = config.usda.credential().cloned();

    if api_key.is_none() {
        warn!("USDA_API_KEY is not set; /search and /food will answer 500 until it is configured");
    }

    Ok(AppState::new(api_key, Arc::new(client)))
}

/// Start HTTP server and serve until a shutdown signal arrives
pub async fn start_server(config: &Config) -> Result<()> {
    let state = build_state(config)?;
    let app = build_router(state, &config.cors);

    let addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FoodInfoError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FoodInfoError::Internal(format!("Server error: {}", e)))?;

    info!("Server shutdown complete");
    Ok(())
}
