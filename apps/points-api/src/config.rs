//! Service configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default debug-mode output file, written to the working directory.
pub const DEFAULT_RESPONSE_PATH: &str = "response.json";

/// Points API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP server binds to
    pub host: IpAddr,

    /// HTTP server port
    pub port: u16,

    /// Log filter used when `RUST_LOG` is unset
    pub log_level: String,

    /// Where debug file mode writes its `{id, points}` output
    pub response_path: PathBuf,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ServiceConfig {
            host: lookup("POINTS_HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_HOST".to_string()))?,

            port: lookup("POINTS_PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_PORT".to_string()))?,

            log_level: lookup("POINTS_LOG").unwrap_or_else(|| "info".to_string()),

            response_path: lookup("POINTS_RESPONSE_PATH")
                .unwrap_or_else(|| DEFAULT_RESPONSE_PATH.to_string())
                .into(),
        };

        if config.log_level.trim().is_empty() {
            return Err(ConfigError::MissingRequired("POINTS_LOG".to_string()));
        }

        Ok(config)
    }

    /// Socket address for the HTTP listener.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}
