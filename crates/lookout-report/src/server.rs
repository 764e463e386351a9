//! Report server implementation.

use crate::error::ReportError;
use crate::routes::{self, ReportState};
use crate::sink::ReportSink;
use axum::Router;
use lookout_core::ServerConfig;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The report server.
pub struct ReportServer {
    config: ServerConfig,
    state: ReportState,
}

impl ReportServer {
    /// Create a new report server writing to `sink`.
    ///
    /// Fails if the endpoint and health paths cannot be mounted.
    pub fn new(config: ServerConfig, sink: Arc<dyn ReportSink>) -> Result<Self, ReportError> {
        config.validate_paths()?;

        Ok(Self {
            config,
            state: ReportState::new(sink),
        })
    }

    /// Build the router without binding a socket.
    pub fn router(&self) -> Router {
        routes::create_router(self.state.clone(), &self.config)
    }

    /// Bind the configured address and serve until `shutdown` resolves.
    pub async fn run(
        &self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ReportError> {
        let listener = TcpListener::bind(&self.config.bind).await.map_err(|e| {
            ReportError::StartupFailed(format!("Failed to bind {}: {}", self.config.bind, e))
        })?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve(
        &self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), ReportError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            endpoint = %self.config.endpoint,
            "Lookout report server listening"
        );

        let app = self.router().into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ReportError::Internal(e.into()))?;

        tracing::info!("Lookout report server stopped");
        Ok(())
    }

    /// Get the configured endpoint path.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NullSink;

    #[test]
    fn test_server_creation() {
        let server = ReportServer::new(ServerConfig::default(), Arc::new(NullSink)).unwrap();
        assert_eq!(server.endpoint(), "/api/csp-report");
    }

    #[test]
    fn test_unmountable_paths_rejected() {
        let config = ServerConfig {
            endpoint: "csp-report".to_string(),
            ..Default::default()
        };
        let result = ReportServer::new(config, Arc::new(NullSink));
        assert!(matches!(result, Err(ReportError::InvalidConfig(_))));

        let config = ServerConfig {
            health_path: "/api/csp-report".to_string(),
            ..Default::default()
        };
        let result = ReportServer::new(config, Arc::new(NullSink));
        assert!(matches!(result, Err(ReportError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_run_rejects_bad_bind() {
        let config = ServerConfig {
            bind: "127.0.0.1".to_string(),
            ..Default::default()
        };
        let server = ReportServer::new(config, Arc::new(NullSink)).unwrap();

        let result = server.run(async {}).await;
        assert!(matches!(result, Err(ReportError::StartupFailed(_))));
    }
}
