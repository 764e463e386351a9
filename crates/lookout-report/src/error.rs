//! Error types for the report crate.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while handling a violation report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Request used a method other than POST.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Request body is not valid JSON.
    #[error("malformed report payload: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// Failed to read the request body.
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    /// Failed to write a record to the sink.
    #[error("sink error: {0}")]
    Sink(String),

    /// Server configuration cannot be mounted.
    #[error("invalid server configuration: {0}")]
    InvalidConfig(#[from] lookout_core::ConfigError),

    /// Failed to start the server.
    #[error("failed to start report server: {0}")]
    StartupFailed(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ReportError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ReportError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ReportError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    ///
    /// Server-side failures share one generic message so internals never
    /// reach the client.
    pub fn public_message(&self) -> &'static str {
        match self {
            ReportError::MethodNotAllowed => "Method not allowed",
            ReportError::MalformedPayload(_) => "Invalid JSON payload",
            _ => "Internal server error",
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let mut response =
            (self.status(), Json(json!({ "error": self.public_message() }))).into_response();

        if matches!(self, ReportError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ReportError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ReportError::Sink("down".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ReportError::BodyRead("reset".into()).public_message(),
            "Internal server error"
        );

        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ReportError::MalformedPayload(parse_error);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Invalid JSON payload");
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = ReportError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }
}
