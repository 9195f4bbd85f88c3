//! Configuration model loaded from external sources.

use std::path::Path;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::domain::types::PageSize;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid settings: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_search_debounce_ms() -> u64 {
    500
}

#[derive(Clone, Debug, Deserialize, Validate)]
/// Settings shared by the REST sources and the list screens.
pub struct ClientConfig {
    /// Base URL of the marketplace backend, e.g. `https://api.example.com/api/`.
    #[validate(url)]
    pub api_base_url: String,
    /// Bearer token issued by the authentication service, if any.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    #[validate(range(min = 1, max = 300))]
    pub request_timeout_secs: u64,
    #[serde(default = "default_search_debounce_ms")]
    #[validate(range(max = 5000))]
    pub search_debounce_ms: u64,
    #[serde(default)]
    pub default_page_size: PageSize,
}

impl ClientConfig {
    /// Reads `{dir}/default.yaml`, then `{dir}/{app_env}.yaml` when present,
    /// then `APP_*` environment variables, and validates the result.
    pub fn load(dir: impl AsRef<Path>, app_env: &str) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let settings = Config::builder()
            .add_source(File::with_name(&dir.join("default").to_string_lossy()))
            .add_source(File::with_name(&dir.join(app_env).to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?;

        let config: ClientConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
