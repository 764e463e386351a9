//! # lookout-report
//!
//! HTTP endpoint that receives Content-Security-Policy violation reports
//! sent by browsers and writes them to a log sink.
//!
//! Each accepted report becomes one [`ViolationRecord`]: the payload fields
//! sent by the browser, merged with request metadata captured by the server.
//!
//! ## Record Format
//!
//! | Field | Source |
//! |-------|--------|
//! | payload fields | request body (`blocked-uri`, `violated-directive`, ...) |
//! | `timestamp` | capture instant, RFC 3339 with milliseconds |
//! | `userAgent` | `user-agent` header, omitted when absent |
//! | `ip` | `x-forwarded-for`, then `x-real-ip`, then the peer address |
//!
//! ## Responses
//!
//! | Status | Body | When |
//! |--------|------|------|
//! | `204` | empty | report written to the sink |
//! | `400` | `{"error":"Invalid JSON payload"}` | body is not JSON |
//! | `405` | `{"error":"Method not allowed"}` | method other than `POST` |
//! | `500` | `{"error":"Internal server error"}` | body read or sink failure |
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lookout_core::LookoutConfig;
//! use lookout_report::{create_sink, ReportServer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = LookoutConfig::default();
//! let sink = create_sink(&config.sink)?;
//!
//! let server = ReportServer::new(config.server, sink)?;
//! server.run(async { let _ = tokio::signal::ctrl_c().await; }).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod metadata;
pub mod record;
pub mod routes;
pub mod server;
pub mod sink;

pub use error::ReportError;
pub use metadata::RequestMetadata;
pub use record::ViolationRecord;
pub use routes::{create_router, ReportState};
pub use server::ReportServer;
pub use sink::{
    create_sink, ConsoleSink, FileSink, MemorySink, NullSink, ReportSink, TracingSink,
};
