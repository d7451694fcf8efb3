//! Configuration management for the food info backend

use serde::{Deserialize, Serialize};
use std::path::Path;
use secrecy::{ExposeSecret, Secret};

pub mod loader;
pub mod validation;

/// Environment variable holding the FoodData Central API key
pub const API_KEY_ENV: &str = "USDA_API_KEY";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub usda: UsdaConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Configuration for the FoodData Central upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsdaConfig {
    /// API key (optional, secured). Missing keys fail requests, not startup.
    #[serde(default, serialize_with = "serialize_optional_secret", deserialize_with = "deserialize_optional_secret")]
    pub api_key: Option<Secret<String>>,

    /// Base URL of the FDC v1 API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Results per search page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for UsdaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            page_size: default_page_size(),
        }
    }
}

impl UsdaConfig {
    /// The configured key, treating an empty value as missing
    pub fn credential(&self) -> Option<&Secret<String>> {
        self.api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server port
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Server host
    #[serde(default = "default_server_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_server_port(),
            host: default_server_host(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string to bind to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json, compact or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Cross-origin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated list of origins
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

// Default value functions
fn default_base_url() -> String { "https://api.nal.usda.gov/fdc/v1".to_string() }
fn default_timeout() -> u64 { 12 }
fn default_page_size() -> u32 { 20 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }
fn default_server_port() -> u16 { 8000 }
fn default_server_host() -> String { "0.0.0.0".to_string() }
fn default_allowed_origins() -> String { "*".to_string() }

impl Config {
    /// Load configuration from an optional TOML file layered under
    /// `FOOD_INFO__*` environment variables
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> crate::error::Result<Self> {
        let config = loader::load_config(path)?;
        validation::validate_config(&config)?;
        Ok(config)
    }

    /// Validate this configuration
    pub fn validate(&self) -> crate::error::Result<()> {
        validation::validate_config(self)
    }
}

/// Custom serializer for Option<Secret<String>>
fn serialize_optional_secret<S>(secret: &Option<Secret<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match secret {
        Some(s) => serializer.serialize_some(s.expose_secret()),
        None => serializer.serialize_none(),
    }
}

/// Custom deserializer for Option<Secret<String>>
fn deserialize_optional_secret<'de, D>(deserializer: D) -> Result<Option<Secret<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(Secret::new))
}
