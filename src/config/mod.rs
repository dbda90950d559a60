//! Configuration management
//!
//! Loads the backend configuration from a YAML file with environment
//! overrides, then validates it before the server starts.

mod models;

pub use models::{AuthConfig, DocumentStoreConfig, IdentityConfig, ServerConfig};

use crate::utils::error::{AppError, Result};
use std::path::Path;
use tracing::{debug, info, warn};

/// Default configuration file path, relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = "config/scribegate.yaml";

/// Main configuration for the backend
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Identity provider connection
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Document store connection
    #[serde(default)]
    pub store: DocumentStoreConfig,
    /// Access-control settings
    #[serde(default)]
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::config(format!("failed to read config file: {e}")))?;

        let mut config: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::config(format!("failed to parse config: {e}")))?;

        config.apply_env_overrides();
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration: the file named by `SCRIBEGATE_CONFIG` (or the
    /// default path) when present, environment defaults otherwise.
    pub async fn load() -> Result<Self> {
        // A missing .env file is fine; real environments set variables
        // directly.
        dotenvy::dotenv().ok();

        let path =
            std::env::var("SCRIBEGATE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if Path::new(&path).exists() {
            Self::from_file(&path).await
        } else {
            warn!(%path, "configuration file not found, using environment defaults");
            let mut config = Config::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
    }

    /// Overlay settings from environment variables
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("SCRIBEGATE_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SCRIBEGATE_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(_) => warn!(%port, "ignoring unparsable SCRIBEGATE_PORT"),
            }
        }
        if let Ok(url) = std::env::var("SCRIBEGATE_IDENTITY_URL") {
            self.identity.base_url = url;
        }
        if let Ok(key) = std::env::var("SCRIBEGATE_IDENTITY_API_KEY") {
            self.identity.api_key = key;
        }
        if let Ok(url) = std::env::var("SCRIBEGATE_STORE_URL") {
            self.store.base_url = url;
        }
        if let Ok(key) = std::env::var("SCRIBEGATE_STORE_API_KEY") {
            self.store.api_key = key;
        }
    }

    /// Validate the configuration before use
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::config("server.port must be non-zero"));
        }
        validate_base_url("identity.base_url", &self.identity.base_url)?;
        validate_base_url("store.base_url", &self.store.base_url)?;
        if self.auth.session_ttl_secs == 0 {
            return Err(AppError::config("auth.session_ttl_secs must be non-zero"));
        }
        if self.auth.role_check_timeout_secs == 0 {
            return Err(AppError::config(
                "auth.role_check_timeout_secs must be non-zero",
            ));
        }
        if self.identity.api_key.is_empty() {
            warn!("identity.api_key is empty; provider calls will be rejected upstream");
        }
        Ok(())
    }
}

fn validate_base_url(field: &str, value: &str) -> Result<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| AppError::config(format!("{field} is not a valid URL: {e}")))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::config(format!("{field} must use http or https")));
    }
    Ok(())
}
