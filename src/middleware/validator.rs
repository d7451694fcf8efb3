//! Input validation for search and detail requests

use axum::extract::rejection::{PathRejection, QueryRejection};
use tracing::{debug, warn};

/// Input validator
pub struct InputValidator;

impl InputValidator {
    /// Validate the search text
    pub fn validate_query(query: &str) -> Result<(), ValidationError> {
        if query.is_empty() {
            warn!("Validation failed: empty search query");
            return Err(ValidationError::EmptyQuery);
        }

        debug!("Query validation passed");
        Ok(())
    }

    /// Validate a 1-based page number
    pub fn validate_page(page: i64) -> Result<u32, ValidationError> {
        if page < 1 {
            warn!("Validation failed: page {} < 1", page);
            return Err(ValidationError::InvalidPage(page));
        }

        u32::try_from(page).map_err(|_| ValidationError::InvalidPage(page))
    }

    /// Validate an FDC id taken from the request path
    pub fn validate_food_id(id: i64) -> Result<i64, ValidationError> {
        if id < 1 {
            warn!("Validation failed: food id {} < 1", id);
            return Err(ValidationError::InvalidFoodId(id));
        }

        Ok(id)
    }
}

/// Validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("query must be at least 1 character long")]
    EmptyQuery,

    #[error("page must be greater than or equal to 1, got {0}")]
    InvalidPage(i64),

    #[error("food id must be greater than or equal to 1, got {0}")]
    InvalidFoodId(i64),

    #[error("Invalid request: {0}")]
    Malformed(String),
}

impl From<QueryRejection> for ValidationError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::Malformed(rejection.body_text())
    }
}

impl From<PathRejection> for ValidationError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::Malformed(rejection.body_text())
    }
}
