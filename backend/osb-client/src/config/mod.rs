use crate::error::config::ConfigError;
use crate::version::ApiVersion;

use common::ErrorLocation;

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const DEFAULT_BROKER_NAME: &str = "broker";
const DEFAULT_BROKER_URL: &str = "http://127.0.0.1:8080";
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
const MAX_TIMEOUT_SECONDS: u64 = 600;

/// Connection settings for a broker.
///
/// Loadable from a JSON file; every field except `url` has a usable default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfiguration {
    /// Display name for the broker, used in log lines only.
    #[serde(default = "default_name")]
    pub name: String,

    /// Base URL of the broker, e.g. "https://broker.example.com".
    #[serde(default = "default_url")]
    pub url: String,

    /// Protocol revision to negotiate. Sent as `X-Broker-API-Version`.
    #[serde(default = "default_api_version")]
    pub api_version: ApiVersion,

    /// Opt-in for operations not yet stabilized in the broker API.
    #[serde(default)]
    pub enable_alpha_features: bool,

    /// Per-request timeout enforced by the HTTP transport.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Value for the `X-Broker-API-Originating-Identity` header, if any.
    pub originating_identity: Option<String>,
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self {
            name: default_name(),
            url: default_url(),
            api_version: default_api_version(),
            enable_alpha_features: false,
            timeout_seconds: default_timeout_seconds(),
            originating_identity: None,
        }
    }
}

fn default_name() -> String {
    DEFAULT_BROKER_NAME.to_string()
}
fn default_url() -> String {
    DEFAULT_BROKER_URL.to_string()
}
fn default_api_version() -> ApiVersion {
    ApiVersion::LATEST
}
fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

impl ClientConfiguration {
    /// Load a configuration from a JSON file.
    ///
    /// # Returns
    ///
    /// Returns `Ok(ClientConfiguration)` with defaults if the file is missing.
    /// Returns `Err(ConfigError)` if the file exists but is unreadable,
    /// corrupted, or fails validation.
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            info!(
                "Broker config not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path).map_err(|e| {
            warn!("Failed to read broker config: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: config_path.to_path_buf(),
                source: e,
            }
        })?;

        let configuration: ClientConfiguration =
            serde_json::from_str(&contents).map_err(|e| {
                warn!("Failed to parse broker config JSON: {}", e);
                ConfigError::ParseError {
                    location: ErrorLocation::caller(),
                    path: config_path.to_path_buf(),
                    reason: e.to_string(),
                }
            })?;

        configuration.validate()?;

        info!("Broker config loaded from {}", config_path.display());
        Ok(configuration)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: "Broker URL cannot be empty".to_string(),
            });
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: format!("Invalid broker URL format: {}", self.url),
            });
        }

        if self.timeout_seconds == 0 || self.timeout_seconds > MAX_TIMEOUT_SECONDS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: format!(
                    "Invalid timeout: {}s (must be 1-{}s)",
                    self.timeout_seconds, MAX_TIMEOUT_SECONDS
                ),
            });
        }

        Ok(())
    }
}
