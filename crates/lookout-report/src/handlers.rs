//! Request handlers.

use crate::error::ReportError;
use crate::metadata::RequestMetadata;
use crate::record::ViolationRecord;
use crate::routes::ReportState;
use axum::{
    extract::{ConnectInfo, Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::net::SocketAddr;

/// Handle a violation report.
///
/// Only `POST` is processed. The body is parsed as JSON regardless of
/// `Content-Type`, since browsers send `application/csp-report`,
/// `application/reports+json` or `application/json`.
#[tracing::instrument(
    name = "csp_report",
    skip_all,
    fields(report_id = %uuid::Uuid::new_v4(), method = %request.method())
)]
pub async fn handle_report(State(state): State<ReportState>, request: Request) -> Response {
    if request.method() != Method::POST {
        tracing::debug!("Rejected non-POST report request");
        return ReportError::MethodNotAllowed.into_response();
    }

    match process_report(&state, request).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err @ ReportError::MalformedPayload(_)) => {
            tracing::warn!(error = %err, "Rejected malformed CSP report");
            err.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Error processing CSP report");
            err.into_response()
        }
    }
}

async fn process_report(state: &ReportState, request: Request) -> Result<(), ReportError> {
    let remote_ip = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let metadata = RequestMetadata::capture(request.headers(), remote_ip);

    let body = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .map_err(|e| ReportError::BodyRead(e.to_string()))?;

    let record = ViolationRecord::from_body(&body, &metadata)?;
    state.sink().emit(&record).await
}

/// Handle health check requests.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "ok": true, "service": "lookout" }))
}
