//! Configuration types for Lookout.
//!
//! Configuration is loaded from a single file and combined into a
//! `LookoutConfig`. The file format follows the extension:
//!
//! - **`.toml`**: parsed with `toml`
//! - **`.yaml` / `.yml`**: parsed with `serde_yaml`
//!
//! Every section is optional; missing keys fall back to their defaults.

pub mod logging;
pub mod server;
pub mod sink;

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use sink::{SinkBackend, SinkConfig};

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "lookout.toml";

/// Complete Lookout configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LookoutConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Where violation records go.
    #[serde(default)]
    pub sink: SinkConfig,

    /// Process logging.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LookoutConfig {
    /// Load configuration from a file, picking the parser from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str());

        match extension {
            Some("toml") => Self::from_toml(&fs::read_to_string(path)?),
            Some("yaml") | Some("yml") => Self::from_yaml(&fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parse configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Parse configuration from YAML content.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(ConfigError::from)
    }

    /// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in the
    /// working directory if present, or fall back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            Ok(Self::default())
        }
    }

    /// Check the configuration for values the server cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        self.server.validate_paths()?;

        Ok(())
    }

    /// Parsed bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|e| {
            ConfigError::Config(format!("invalid server.bind '{}': {e}", self.server.bind))
        })
    }
}
