//! Food Info Backend - a thin proxy over USDA FoodData Central
//!
//! Exposes three endpoints for a client application:
//!
//! - `GET /health` liveness probe
//! - `GET /search?query=..&page=..` paged food search (20 per page)
//! - `GET /food/{fdc_id}` calories, protein, fat, carbs and fiber for one food
//!
//! Upstream payloads are kept as untyped JSON and reduced to a small, stable
//! contract by [`nutrition::simplify_foods`] and
//! [`nutrition::extract_key_nutrients`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use food_info_backend::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load(Some("config.toml"))?;
//!     food_info_backend::server::start_server(&config).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod nutrition;
pub mod observability;
pub mod server;
pub mod shutdown;
pub mod usda;

pub use config::Config;
pub use error::{FoodInfoError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::api::{build_router, AppState};
    pub use crate::config::Config;
    pub use crate::error::{FoodInfoError, Result, UpstreamError};
    pub use crate::nutrition::{
        extract_key_nutrients, simplify_foods, FoodDetail, FoodSummary, NutrientSet, SearchResult,
    };
    pub use crate::usda::{FoodDataSource, UsdaClient};
}
