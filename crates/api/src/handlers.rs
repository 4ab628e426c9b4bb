//! HTTP handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{MatchedPath, State},
};
use regviz_core::{ValidationRequest, ValidationResult};
use serde::Serialize;

use crate::state::AppState;

/// Validate the pattern in a `{"regex": ...}` body.
///
/// Always answers 200: an uncompilable pattern is a normal outcome. The body
/// is read as raw bytes so that malformed JSON, a missing content type or a
/// non-text `regex` all fall back to the empty pattern instead of a 4xx.
pub async fn validate(
    State(state): State<AppState>,
    route: MatchedPath,
    body: Bytes,
) -> Json<ValidationResult> {
    let request = ValidationRequest::from_body(&body);
    let result = state.validator().validate(request.pattern());
    tracing::debug!(
        route = route.as_str(),
        pattern_len = request.pattern().len(),
        valid = result.is_valid(),
        "pattern checked"
    );
    Json(result)
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving.
    pub status: &'static str,
    /// Server crate version.
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
