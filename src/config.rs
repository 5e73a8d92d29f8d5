//! Configuration types.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;

/// Organization id of the vendor session seeded by the fixtures.
pub const DEFAULT_VENDOR_ORG: &str = "org_vendor_1";

/// Portal service configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Address the HTTP server binds to.
    pub bind_host: String,
    /// Port for the REST API.
    pub port: u16,
    /// Artificial delay applied to every storage call.
    pub simulated_latency: Duration,
    /// Whether the in-memory store starts with the demo fixtures.
    pub seed_fixtures: bool,
    /// Organization id served to the active vendor session.
    pub vendor_org_id: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 8080,
            simulated_latency: Duration::ZERO,
            seed_fixtures: true,
            vendor_org_id: DEFAULT_VENDOR_ORG.to_string(),
        }
    }
}

impl PortalConfig {
    /// Build config from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_host = lookup("CLAIMSY_BIND").unwrap_or(defaults.bind_host);

        let port = match lookup("CLAIMSY_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                key: "CLAIMSY_PORT".to_string(),
                message: e.to_string(),
            })?,
            None => defaults.port,
        };

        let latency_ms = match lookup("CLAIMSY_LATENCY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                key: "CLAIMSY_LATENCY_MS".to_string(),
                message: e.to_string(),
            })?,
            None => 300,
        };

        let seed_fixtures = match lookup("CLAIMSY_SEED_FIXTURES") {
            Some(raw) => parse_bool("CLAIMSY_SEED_FIXTURES", &raw)?,
            None => defaults.seed_fixtures,
        };

        let vendor_org_id = lookup("CLAIMSY_VENDOR_ORG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.vendor_org_id);

        Ok(Self {
            bind_host,
            port,
            simulated_latency: Duration::from_millis(latency_ms),
            seed_fixtures,
            vendor_org_id,
        })
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.bind_host, self.port)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
                key: "CLAIMSY_BIND".to_string(),
                message: e.to_string(),
            })
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("expected a boolean, got {other:?}"),
        }),
    }
}
