//! Report sink configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where violation records are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SinkConfig {
    /// Sink backend type.
    #[serde(default)]
    pub backend: SinkBackend,

    /// File path (for the file backend).
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
}

/// Sink backend type.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SinkBackend {
    /// Emit an error-level `tracing` event per record.
    #[default]
    Tracing,
    /// Print one JSON line per record to stdout.
    Console,
    /// Append one JSON line per record to a file.
    File,
    /// Drop every record.
    Null,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            backend: SinkBackend::default(),
            file_path: default_file_path(),
        }
    }
}

fn default_file_path() -> PathBuf {
    PathBuf::from("csp-reports.log")
}
