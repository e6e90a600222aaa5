// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::{AnalyzerError, Result};
use axum::extract::rejection::BytesRejection;
use axum::{extract::State, response::Html, Json};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

const INDEX_HTML: &str = include_str!("../../templates/index.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub model: String,
    pub timestamp: String,
}

/// Landing page with an upload form.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model: state.config.gemini.model.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `POST /api/v1/analyze`.
///
/// The body is the raw image; no multipart decoding and no content-type check.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<Value>> {
    let body = body.map_err(|rejection| {
        error!("Failed to read request body: {}", rejection);
        AnalyzerError::InvalidRequest(rejection.body_text())
    })?;

    if body.is_empty() {
        debug!("Rejecting request with empty body");
        return Err(AnalyzerError::EmptyBody);
    }

    info!("Received analyze request: {} bytes", body.len());

    let result = state.translator.analyze(&body).await.map_err(|e| {
        error!("Image analysis failed: {}", e);
        e
    })?;

    Ok(Json(result))
}
