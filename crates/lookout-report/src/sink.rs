//! Report sinks.

use crate::error::ReportError;
use crate::record::ViolationRecord;
use async_trait::async_trait;
use lookout_core::config::{SinkBackend, SinkConfig};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio::io::AsyncWriteExt;

/// `tracing` target used for violation records.
pub const REPORT_TARGET: &str = "lookout::csp";

/// Destination for violation records.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Write one record.
    async fn emit(&self, record: &ViolationRecord) -> Result<(), ReportError>;
}

/// Create a sink based on configuration.
pub fn create_sink(config: &SinkConfig) -> Result<Arc<dyn ReportSink>, ReportError> {
    let sink: Arc<dyn ReportSink> = match config.backend {
        SinkBackend::Tracing => Arc::new(TracingSink),
        SinkBackend::Console => Arc::new(ConsoleSink),
        SinkBackend::File => Arc::new(FileSink::new(&config.file_path)?),
        SinkBackend::Null => Arc::new(NullSink),
    };

    tracing::debug!(backend = ?config.backend, "Report sink created");
    Ok(sink)
}

/// Emits each record as an error-level `tracing` event.
pub struct TracingSink;

#[async_trait]
impl ReportSink for TracingSink {
    async fn emit(&self, record: &ViolationRecord) -> Result<(), ReportError> {
        let json = record.to_json_line()?;
        tracing::error!(target: REPORT_TARGET, report = %json, "CSP Violation");
        Ok(())
    }
}

/// Console sink (one JSON line per record on stdout).
pub struct ConsoleSink;

#[async_trait]
impl ReportSink for ConsoleSink {
    async fn emit(&self, record: &ViolationRecord) -> Result<(), ReportError> {
        let mut line = record.to_json_line()?;
        line.push('\n');

        let mut stdout = tokio::io::stdout();
        stdout.write_all(line.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// File sink (appends JSON Lines to a file).
pub struct FileSink {
    path: PathBuf,
    file: tokio::sync::Mutex<tokio::fs::File>,
}

impl FileSink {
    /// Open `path` for appending, creating it if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref().to_path_buf();
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;

        Ok(Self {
            path,
            file: tokio::sync::Mutex::new(tokio::fs::File::from_std(file)),
        })
    }

    /// Path records are appended to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ReportSink for FileSink {
    async fn emit(&self, record: &ViolationRecord) -> Result<(), ReportError> {
        let mut line = record.to_json_line()?;
        line.push('\n');

        // One write per record so concurrent reports never interleave.
        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Discards every record.
pub struct NullSink;

#[async_trait]
impl ReportSink for NullSink {
    async fn emit(&self, _record: &ViolationRecord) -> Result<(), ReportError> {
        Ok(())
    }
}

/// Keeps records in memory; useful for tests and embedding.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<ViolationRecord>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records emitted so far, oldest first.
    pub fn records(&self) -> Vec<ViolationRecord> {
        self.records
            .lock()
            .map(|records| records.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    async fn emit(&self, record: &ViolationRecord) -> Result<(), ReportError> {
        let mut records = self
            .records
            .lock()
            .map_err(|e| ReportError::Sink(format!("Failed to acquire lock: {}", e)))?;
        records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::RequestMetadata;
    use axum::http::HeaderMap;
    use serde_json::json;

    fn record(uri: &str) -> ViolationRecord {
        let meta = RequestMetadata::capture(&HeaderMap::new(), None);
        ViolationRecord::new(json!({ "blocked-uri": uri }), &meta)
    }

    #[tokio::test]
    async fn test_tracing_and_null_sinks() {
        TracingSink.emit(&record("inline")).await.unwrap();
        NullSink.emit(&record("inline")).await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_sink_keeps_order() {
        let sink = MemorySink::new();
        sink.emit(&record("https://a.example")).await.unwrap();
        sink.emit(&record("https://b.example")).await.unwrap();

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("blocked-uri"), Some(&json!("https://a.example")));
        assert_eq!(records[1].get("blocked-uri"), Some(&json!("https://b.example")));
    }

    #[tokio::test]
    async fn test_file_sink_appends_json_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.log");

        let sink = FileSink::new(&path).unwrap();
        sink.emit(&record("https://a.example")).await.unwrap();
        sink.emit(&record("https://b.example")).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["blocked-uri"], "https://a.example");
        assert!(first["timestamp"].is_string());
    }

    #[test]
    fn test_file_sink_bad_path() {
        let result = FileSink::new("/nonexistent-dir/reports.log");
        assert!(matches!(result, Err(ReportError::Io(_))));
    }

    #[tokio::test]
    async fn test_create_sink_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = SinkConfig {
            backend: SinkBackend::File,
            file_path: dir.path().join("out.log"),
        };

        let sink = create_sink(&config).unwrap();
        sink.emit(&record("eval")).await.unwrap();
        assert!(dir.path().join("out.log").exists());

        let sink = create_sink(&SinkConfig::default()).unwrap();
        sink.emit(&record("eval")).await.unwrap();
    }
}
