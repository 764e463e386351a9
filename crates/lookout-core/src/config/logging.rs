//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Settings for the process-wide `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `filter` when it is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. "info" or "lookout_report=debug,info".
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Whether to emit ANSI colors.
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            ansi: default_ansi(),
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

fn default_ansi() -> bool {
    true
}
