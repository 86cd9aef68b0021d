//! Server configuration
//!
//! Loaded once at startup from the environment (`.env` files supported via
//! dotenvy). Unset keys fall back to defaults; a malformed value is reported
//! as an error so `main` can warn and fall back to the full default config.

use std::env;

use thiserror::Error;

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerConfig,
    pub matching: MatchingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen port
    pub port: u16,
    /// Maximum accepted request body size in megabytes
    pub max_upload_mb: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            max_upload_mb: 256,
        }
    }
}

/// Term matching settings
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Case sensitivity of the text-based matching strategy. The geometric
    /// search follows the PDF engine's own matching semantics regardless.
    pub case_sensitive: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Ok(value) = env::var("TERMSCAN_PORT") {
            config.server.port = value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "TERMSCAN_PORT",
                value,
            })?;
        }

        if let Ok(value) = env::var("TERMSCAN_MAX_UPLOAD_MB") {
            config.server.max_upload_mb =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "TERMSCAN_MAX_UPLOAD_MB",
                    value,
                })?;
        }

        if let Ok(value) = env::var("TERMSCAN_CASE_SENSITIVE") {
            config.matching.case_sensitive =
                value.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "TERMSCAN_CASE_SENSITIVE",
                    value,
                })?;
        }

        Ok(config)
    }

    /// Maximum request body size in bytes
    pub fn max_upload_bytes(&self) -> usize {
        self.server.max_upload_mb * 1024 * 1024
    }
}
