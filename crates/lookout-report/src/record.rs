//! Violation records.
//!
//! A record is the browser's payload with request metadata laid over it.
//! Metadata keys are applied last, so a payload that happens to carry
//! `timestamp`, `userAgent` or `ip` is overridden, and an unknown
//! `userAgent` or `ip` removes the payload's key rather than keeping it.

use crate::error::ReportError;
use crate::metadata::RequestMetadata;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Record key for the capture timestamp.
pub const TIMESTAMP_KEY: &str = "timestamp";
/// Record key for the client user agent.
pub const USER_AGENT_KEY: &str = "userAgent";
/// Record key for the client address.
pub const IP_KEY: &str = "ip";
/// Record key holding payloads that are not JSON objects.
pub const REPORT_KEY: &str = "report";

/// One logged violation report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationRecord(Map<String, Value>);

impl ViolationRecord {
    /// Build a record from a parsed payload and the request's metadata.
    ///
    /// Object payloads are merged at the top level. `null` contributes no
    /// fields. Any other value (a Reporting API batch array, a bare string)
    /// is kept under [`REPORT_KEY`].
    pub fn new(payload: Value, metadata: &RequestMetadata) -> Self {
        let mut fields = match payload {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                let mut map = Map::new();
                map.insert(REPORT_KEY.to_string(), other);
                map
            }
        };

        fields.insert(
            TIMESTAMP_KEY.to_string(),
            Value::String(metadata.timestamp_iso()),
        );
        set_or_remove(&mut fields, USER_AGENT_KEY, metadata.user_agent.as_deref());
        set_or_remove(&mut fields, IP_KEY, metadata.ip.as_deref());

        Self(fields)
    }

    /// Parse a raw request body and build a record from it.
    pub fn from_body(body: &[u8], metadata: &RequestMetadata) -> Result<Self, ReportError> {
        Ok(Self::new(parse_payload(body)?, metadata))
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// All fields of the record.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl From<ViolationRecord> for Value {
    fn from(record: ViolationRecord) -> Self {
        Value::Object(record.0)
    }
}

/// Parse a request body into a JSON payload.
///
/// An empty or whitespace-only body is an empty object.
pub fn parse_payload(body: &[u8]) -> Result<Value, ReportError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(ReportError::MalformedPayload)
}

fn set_or_remove(fields: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    match value {
        Some(value) => {
            fields.insert(key.to_string(), Value::String(value.to_string()));
        }
        None => {
            fields.remove(key);
        }
    }
}
