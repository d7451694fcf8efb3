//! API route configuration

use axum::{routing::get, Json, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{config::CorsConfig, middleware::setup_cors};

use super::handlers::{self, AppState};

/// Build the complete API router with middleware
pub fn build_router(app_state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(handlers::health))
        .route("/search", get(handlers::search_foods))
        .route("/food/:fdc_id", get(handlers::food_details))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(setup_cors(cors)),
        )
        .with_state(app_state)
}

/// Root handler
async fn root_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "Food Info Backend",
        "description": "Middleware for USDA FoodData Central API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running"
    }))
}
