//! FoodData Central upstream access

pub mod client;

pub use client::UsdaClient;

use async_trait::async_trait;
use crate::error::UpstreamError;
use crate::nutrition::RawDocument;

/// Source of raw FDC search and detail payloads
#[async_trait]
pub trait FoodDataSource: Send + Sync {
    /// Fetch one page of search results for `query`
    async fn search_foods(
        &self,
        api_key: &str,
        query: &str,
        page: u32,
    ) -> Result<RawDocument, UpstreamError>;

    /// Fetch the full record for one FDC id
    async fn food_details(&self, api_key: &str, fdc_id: i64) -> Result<RawDocument, UpstreamError>;
}
