//! # lookout-core
//!
//! Configuration types shared across the Lookout crates.

// Configuration types shared across all Lookout crates
pub mod config;

pub use config::{
    ConfigError, LoggingConfig, LookoutConfig, ServerConfig, SinkBackend, SinkConfig,
};
