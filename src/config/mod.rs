//! Configuration module.
//!
//! Structured configuration loaded from environment variables (and a `.env`
//! file when present), organized by concern: the local development server
//! and the mock data generators.

mod mock_data_config;
mod server_config;

pub use mock_data_config::MockDataEnvConfig;
pub use server_config::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT, ServerEnvConfig};

use anyhow::{Context, Result};
use std::env;

/// Main application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub server: ServerEnvConfig,
    pub mock_data: MockDataEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server =
            ServerEnvConfig::from_lookup(&lookup).context("Failed to load server config")?;
        let mock_data =
            MockDataEnvConfig::from_lookup(&lookup).context("Failed to load mock data config")?;

        Ok(Self { server, mock_data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_composes_sub_configs() {
        let config = Config::from_lookup(|key| match key {
            "LOCAL_SERVER_PORT" => Some("4000".to_string()),
            "MOCK_DATA_SEED" => Some("9".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.mock_data.seed, Some(9));
    }

    #[test]
    fn test_sub_config_error_is_wrapped() {
        let err = Config::from_lookup(|key| {
            (key == "MOCK_DATA_SEED").then(|| "not-a-number".to_string())
        })
        .unwrap_err();

        assert!(err.to_string().contains("mock data config"));
    }
}
