//! HTTP client for the FoodData Central v1 API

use super::FoodDataSource;
use crate::config::UsdaConfig;
use crate::error::{FoodInfoError, Result, UpstreamError};
use crate::nutrition::RawDocument;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Client for the FDC search and detail endpoints
pub struct UsdaClient {
    base_url: String,
    page_size: u32,
    http_client: Client,
}

impl UsdaClient {
    /// Create a new client from configuration
    pub fn new(config: &UsdaConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| FoodInfoError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            "Initialized USDA client for {} (timeout {}s)",
            config.base_url, config.timeout_secs
        );

        Ok(Self::with_http_client(config, http_client))
    }

    /// Create client with custom HTTP client
    pub fn with_http_client(config: &UsdaConfig, http_client: Client) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
            http_client,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/foods/search", self.base_url)
    }

    fn detail_url(&self, fdc_id: i64) -> String {
        format!("{}/food/{}", self.base_url, fdc_id)
    }

    async fn get(&self, url: &str, params: &[(&str, String)]) -> std::result::Result<Response, UpstreamError> {
        self.http_client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                // The request URL carries the API key
                let e = e.without_url();
                warn!("USDA request to {} failed: {}", url, e);
                UpstreamError::Unreachable(e.to_string())
            })
    }
}

#[async_trait]
impl FoodDataSource for UsdaClient {
    async fn search_foods(
        &self,
        api_key: &str,
        query: &str,
        page: u32,
    ) -> std::result::Result<RawDocument, UpstreamError> {
        debug!("Searching USDA for '{}' (page {})", query, page);

        let params = [
            ("api_key", api_key.to_string()),
            ("query", query.to_string()),
            ("pageSize", self.page_size.to_string()),
            ("pageNumber", page.to_string()),
        ];
        let response = self.get(&self.search_url(), &params).await?;

        let status = response.status();
        if !status.is_success() {
            warn!("USDA search returned status {}", status);
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: "USDA search failed".to_string(),
            });
        }

        read_document(response).await
    }

    async fn food_details(&self, api_key: &str, fdc_id: i64) -> std::result::Result<RawDocument, UpstreamError> {
        debug!("Fetching USDA food {}", fdc_id);

        let params = [("api_key", api_key.to_string())];
        let response = self.get(&self.detail_url(fdc_id), &params).await?;

        match response.status() {
            StatusCode::NOT_FOUND => {
                debug!("USDA has no food {}", fdc_id);
                Err(UpstreamError::NotFound("Food not found".to_string()))
            }
            status if !status.is_success() => {
                warn!("USDA detail for {} returned status {}", fdc_id, status);
                Err(UpstreamError::Status {
                    status: status.as_u16(),
                    message: "USDA detail failed".to_string(),
                })
            }
            _ => read_document(response).await,
        }
    }
}

/// Read a success body as a JSON object. Empty or non-object bodies become
/// an empty document.
async fn read_document(response: Response) -> std::result::Result<RawDocument, UpstreamError> {
    let body = response
        .bytes()
        .await
        .map_err(|e| UpstreamError::Unreachable(e.without_url().to_string()))?;

    Ok(parse_document(&body))
}

fn parse_document(body: &[u8]) -> RawDocument {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        Ok(_) => RawDocument::new(),
        Err(e) => {
            if !body.is_empty() {
                warn!("Discarding unparseable USDA body ({} bytes): {}", body.len(), e);
            }
            RawDocument::new()
        }
    }
}
