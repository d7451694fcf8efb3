//! API request handlers

use axum::{
    extract::{rejection::{PathRejection, QueryRejection}, Path, Query, State},
    Json,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    error::{FoodInfoError, Result},
    middleware::InputValidator,
    nutrition::{display_text, extract_key_nutrients, simplify_foods, FoodDetail, SearchResult, UNKNOWN_ITEM},
    usda::FoodDataSource,
};

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// FDC API key; `None` when the server was started without one
    pub api_key: Option<Arc<Secret<String>>>,
    pub upstream: Arc<dyn FoodDataSource>,
}

impl AppState {
    /// Keys that are blank after trimming are treated as missing
    pub fn new(api_key: Option<Secret<String>>, upstream: Arc<dyn FoodDataSource>) -> Self {
        Self {
            api_key: api_key
                .filter(|key| !key.expose_secret().trim().is_empty())
                .map(Arc::new),
            upstream,
        }
    }

    /// The API key, or a misconfiguration error when none was configured
    fn credential(&self) -> Result<&str> {
        match &self.api_key {
            Some(key) => Ok(key.expose_secret()),
            None => {
                error!("Rejecting request: USDA_API_KEY is not configured");
                Err(FoodInfoError::Misconfigured(
                    "USDA_API_KEY missing. Add it to .env".to_string(),
                ))
            }
        }
    }
}

/// Query string for `/search`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Health probe body
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Search foods by name, one page of 20 at a time
pub async fn search_foods(
    State(state): State<AppState>,
    params: std::result::Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResult>> {
    let Query(params) = params.map_err(crate::middleware::ValidationError::from)?;
    InputValidator::validate_query(&params.query)?;
    let page = InputValidator::validate_page(params.page)?;

    let api_key = state.credential()?;
    let data = state.upstream.search_foods(api_key, &params.query, page).await?;

    let items = simplify_foods(data.get("foods"));
    let result = SearchResult {
        total_matches: count_field(data.get("totalHits")).unwrap_or(0),
        page_number: count_field(data.get("currentPage")).unwrap_or(i64::from(page)),
        total_pages: count_field(data.get("totalPages")).unwrap_or(0),
        items,
    };

    debug!(
        "Search '{}' page {} returned {} items",
        params.query,
        result.page_number,
        result.items.len()
    );
    Ok(Json(result))
}

/// Fetch a food and its key nutrients
pub async fn food_details(
    State(state): State<AppState>,
    fdc_id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<FoodDetail>> {
    let Path(fdc_id) = fdc_id.map_err(crate::middleware::ValidationError::from)?;
    let fdc_id = InputValidator::validate_food_id(fdc_id)?;

    let api_key = state.credential()?;
    let data = state.upstream.food_details(api_key, fdc_id).await?;

    let nutrients = extract_key_nutrients(&data)?;
    let description = display_text(data.get("description"))
        .unwrap_or_else(|| UNKNOWN_ITEM.to_string());

    Ok(Json(FoodDetail {
        id: count_field(data.get("fdcId")).unwrap_or(fdc_id),
        description,
        nutrients,
    }))
}

/// Read an upstream integer. Missing, null, zero or non-numeric values
/// yield `None` so the caller's default applies.
fn count_field(value: Option<&Value>) -> Option<i64> {
    let n = match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }?;

    (n != 0).then_some(n)
}
