//! Error types for the tokens crate.

use thiserror::Error;

/// A key that is not part of a token table.
///
/// Only returned by the strict `FromStr` parsers; the `resolve_*` helpers
/// fall back to a default instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} token: {key}")]
pub struct UnknownToken {
    /// Which table was searched, e.g. "spacing".
    pub kind: &'static str,
    /// The key that was not found.
    pub key: String,
}
