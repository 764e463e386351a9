//! Route definitions for the report endpoint.

use crate::handlers;
use crate::sink::ReportSink;
use axum::{
    routing::{any, get},
    Router,
};
use lookout_core::ServerConfig;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state for the report handlers.
#[derive(Clone)]
pub struct ReportState {
    sink: Arc<dyn ReportSink>,
}

impl ReportState {
    /// Create state writing records to `sink`.
    pub fn new(sink: Arc<dyn ReportSink>) -> Self {
        Self { sink }
    }

    /// The configured sink.
    pub fn sink(&self) -> &dyn ReportSink {
        self.sink.as_ref()
    }
}

/// Create the router.
///
/// The report endpoint accepts every method so that non-POST requests get
/// the JSON 405 body rather than an empty one.
///
/// # Panics
///
/// Panics if `config` fails [`ServerConfig::validate_paths`]. Use
/// [`ReportServer::new`](crate::ReportServer::new) to get an error instead.
pub fn create_router(state: ReportState, config: &ServerConfig) -> Router {
    Router::new()
        .route(&config.endpoint, any(handlers::handle_report))
        .route(&config.health_path, get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
