//! Local development server configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3003;

/// Local server environment configuration
#[derive(Debug, Clone)]
pub struct ServerEnvConfig {
    pub bind_address: String,
    pub port: u16,
    pub cors: bool,
}

impl Default for ServerEnvConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            cors: true,
        }
    }
}

impl ServerEnvConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("LOCAL_SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Failed to parse LOCAL_SERVER_PORT: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bind_address: lookup("LOCAL_SERVER_BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
            cors: lookup("LOCAL_SERVER_CORS")
                .and_then(|v| v.parse::<bool>().ok())
                .unwrap_or(true),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_server_config_defaults() {
        let config = ServerEnvConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0");
        assert_eq!(config.port, 3003);
        assert!(config.cors);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:3003");
    }

    #[test]
    fn test_server_config_overrides() {
        let config = ServerEnvConfig::from_lookup(lookup_from(&[
            ("LOCAL_SERVER_BIND_ADDRESS", "127.0.0.1"),
            ("LOCAL_SERVER_PORT", "8080"),
            ("LOCAL_SERVER_CORS", "false"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert!(!config.cors);
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = ServerEnvConfig::from_lookup(lookup_from(&[("LOCAL_SERVER_PORT", "http")]));
        assert!(result.is_err());
    }
}
