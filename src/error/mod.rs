//! Error types for the food info backend

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, FoodInfoError>;

/// Main error type for the food info backend
#[derive(Error, Debug)]
pub enum FoodInfoError {
    #[error("{0}")]
    Upstream(#[from] UpstreamError),

    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("{0}")]
    Validation(#[from] crate::middleware::ValidationError),

    #[error("Server misconfigured: {0}")]
    Misconfigured(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised while talking to FoodData Central
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Connection, DNS, timeout or body read failure
    #[error("Upstream request failed: {0}")]
    Unreachable(String),

    #[error("{0}")]
    NotFound(String),

    /// Non-success status other than a detail 404. The upstream body is
    /// never carried here.
    #[error("{message}")]
    Status { status: u16, message: String },
}

/// Errors raised while extracting key nutrients from a food record
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Nutrient amount for {kind} is not numeric: {value}")]
    NonNumericAmount { kind: &'static str, value: String },
}

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl FoodInfoError {
    /// HTTP status this error is surfaced with
    pub fn status_code(&self) -> StatusCode {
        match self {
            FoodInfoError::Upstream(UpstreamError::Unreachable(_)) => StatusCode::BAD_GATEWAY,
            FoodInfoError::Upstream(UpstreamError::NotFound(_)) => StatusCode::NOT_FOUND,
            FoodInfoError::Upstream(UpstreamError::Status { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            FoodInfoError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FoodInfoError::Extraction(_)
            | FoodInfoError::Misconfigured(_)
            | FoodInfoError::Config(_)
            | FoodInfoError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FoodInfoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), "Request failed: {}", self);
        } else {
            tracing::debug!(status = status.as_u16(), "Request rejected: {}", self);
        }

        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

impl From<config::ConfigError> for FoodInfoError {
    fn from(err: config::ConfigError) -> Self {
        FoodInfoError::Config(err.to_string())
    }
}
