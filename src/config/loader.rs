//! Configuration loader with environment variable support

use super::{Config, API_KEY_ENV};
use crate::error::Result;
use config::{Environment, File};
use secrecy::Secret;
use std::path::Path;
use tracing::debug;

/// Prefix for environment overrides, e.g. `FOOD_INFO__SERVER__PORT`
pub const ENV_PREFIX: &str = "FOOD_INFO";

/// Load configuration from an optional TOML file with environment variable
/// overrides. The file may be missing.
///
/// Environment values stay strings until deserialization so the API key is
/// never reinterpreted as a number or boolean.
pub fn load_config<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
    let mut builder = config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(File::from(path.as_ref()).required(false));
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let mut cfg: Config = config.try_deserialize()?;
    apply_api_key_fallback(&mut cfg, std::env::var(API_KEY_ENV).ok());
    Ok(cfg)
}

/// Fill in the API key from the plain `USDA_API_KEY` variable when neither the
/// file nor the prefixed environment provided one
fn apply_api_key_fallback(config: &mut Config, env_key: Option<String>) {
    if config.usda.credential().is_some() {
        return;
    }

    if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
        debug!("Using API key from {}", API_KEY_ENV);
        config.usda.api_key = Some(Secret::new(key));
    }
}
