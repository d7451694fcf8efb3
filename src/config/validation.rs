//! Configuration validation

use super::*;
use crate::error::{FoodInfoError, Result};

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_usda_config(&config.usda)?;
    validate_server_config(&config.server)?;
    validate_logging_config(&config.logging)?;
    Ok(())
}

/// Validate upstream configuration. A missing API key is allowed here; the
/// data endpoints report it per request.
fn validate_usda_config(config: &UsdaConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(FoodInfoError::Config(
            "USDA base URL cannot be empty".to_string()
        ));
    }

    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(FoodInfoError::Config(
            "USDA base URL must start with http:// or https://".to_string()
        ));
    }

    if config.timeout_secs == 0 {
        return Err(FoodInfoError::Config(
            "USDA timeout must be greater than 0".to_string()
        ));
    }

    if config.timeout_secs > 300 {
        return Err(FoodInfoError::Config(
            "USDA timeout too large (max: 300 seconds)".to_string()
        ));
    }

    if config.page_size == 0 || config.page_size > 200 {
        return Err(FoodInfoError::Config(
            format!("USDA page size must be between 1 and 200, got {}", config.page_size)
        ));
    }

    Ok(())
}

/// Validate server configuration
fn validate_server_config(config: &ServerConfig) -> Result<()> {
    if config.port == 0 {
        return Err(FoodInfoError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    if config.host.is_empty() {
        return Err(FoodInfoError::Config(
            "Server host cannot be empty".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &LoggingConfig) -> Result<()> {
    let valid_formats = ["json", "compact", "pretty"];
    if !valid_formats.contains(&config.format.as_str()) {
        return Err(FoodInfoError::Config(
            format!("Invalid log format '{}', expected one of {:?}", config.format, valid_formats)
        ));
    }

    Ok(())
}
