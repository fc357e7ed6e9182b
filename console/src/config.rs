//! Configuration management for the inventory console
//!
//! Hierarchical loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with ZNL_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main console configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// REST backend configuration
    pub api: ApiConfig,

    /// Session attribution, mirrors the user object the browser console
    /// keeps in local storage
    #[serde(default)]
    pub session: Option<SessionConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Backend base URL, e.g. `http://localhost:8000/api`
    pub base_url: String,

    /// Base URL for media files (invoice and report images)
    pub media_url: String,

    /// DRF token sent as `Authorization: Token <...>` when present
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub user_id: i64,
    pub username: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = std::env::var("ZNL_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000/api")?
            .set_default("api.media_url", "http://localhost:8000")?
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("ZNL")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ApiConfig {
    /// Absolute URL for a media path returned by the backend
    pub fn media_url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.media_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_url_joins_relative_paths() {
        let api = ApiConfig {
            base_url: "http://localhost:8000/api".into(),
            media_url: "http://localhost:8000/".into(),
            token: None,
        };
        assert_eq!(
            api.media_url_for("/media/invoices/1.png"),
            "http://localhost:8000/media/invoices/1.png"
        );
        assert_eq!(
            api.media_url_for("https://cdn.example.com/x.png"),
            "https://cdn.example.com/x.png"
        );
    }
}
