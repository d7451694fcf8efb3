//! Cross-origin access for the client application

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build the CORS layer.
///
/// `*` (or an empty value) allows any origin. Otherwise the value is a
/// comma-separated origin list; if none of the entries parse, any origin is
/// allowed. Methods and headers are never restricted.
pub fn setup_cors(config: &CorsConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(&config.allowed_origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

fn allowed_origins(raw: &str) -> AllowOrigin {
    let raw = raw.trim();
    if raw.is_empty() || raw == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        warn!("No valid CORS origins in '{}', allowing any origin", raw);
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn preflight(config: &CorsConfig, origin: &str) -> Option<String> {
        let app = Router::new()
            .route("/search", get(|| async { "ok" }))
            .layer(setup_cors(config));

        let response = app
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri("/search")
                    .header("origin", origin)
                    .header("access-control-request-method", "GET")
                    .header("access-control-request-headers", "x-custom-header")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[tokio::test]
    async fn test_wildcard_allows_any_origin() {
        let config = CorsConfig::default();
        assert_eq!(
            preflight(&config, "http://localhost:5173").await.as_deref(),
            Some("*")
        );
    }

    #[tokio::test]
    async fn test_origin_list() {
        let config = CorsConfig {
            allowed_origins: "https://app.example.com, https://admin.example.com".to_string(),
        };
        assert_eq!(
            preflight(&config, "https://admin.example.com").await.as_deref(),
            Some("https://admin.example.com")
        );
        assert_eq!(preflight(&config, "https://evil.example.com").await, None);
    }
}
