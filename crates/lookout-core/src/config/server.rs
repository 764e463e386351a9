//! HTTP server configuration.

use super::ConfigError;
use serde::{Deserialize, Serialize};

/// Configuration for the report endpoint's HTTP listener.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address, e.g. "0.0.0.0:8080"
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Path the violation report endpoint is mounted on.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Path of the health check endpoint.
    #[serde(default = "default_health_path")]
    pub health_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            endpoint: default_endpoint(),
            health_path: default_health_path(),
        }
    }
}

impl ServerConfig {
    /// Check that both paths can be mounted on a router: each starts with
    /// `/` and they differ.
    pub fn validate_paths(&self) -> Result<(), ConfigError> {
        for (name, path) in [
            ("server.endpoint", &self.endpoint),
            ("server.health_path", &self.health_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Config(format!(
                    "{name} must start with '/', got '{path}'"
                )));
            }
        }

        if self.endpoint == self.health_path {
            return Err(ConfigError::Config(format!(
                "server.endpoint and server.health_path are both '{}'",
                self.endpoint
            )));
        }

        Ok(())
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_endpoint() -> String {
    "/api/csp-report".to_string()
}

fn default_health_path() -> String {
    "/healthz".to_string()
}
