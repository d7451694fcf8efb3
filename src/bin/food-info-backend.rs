//! Food Info Backend server binary
//!
//! Reads `.env`, then an optional `config.toml` (or `CONFIG_PATH`), then
//! `FOOD_INFO__*` environment overrides, and serves the API until Ctrl+C or
//! SIGTERM.

use food_info_backend::{config::Config, observability::init_observability, server::start_server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine outside local development
    let dotenv_path = dotenvy::dotenv().ok();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let config = Config::load(Some(&config_path))?;

    init_observability(&config.logging);

    info!("Starting Food Info Backend v{}", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        info!("Loaded environment from {}", path.display());
    }
    info!("Configuration loaded from {} (optional) and environment", config_path);

    start_server(&config).await?;

    Ok(())
}
