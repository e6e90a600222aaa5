// HTTP routes configuration
// Author: kelexine (https://github.com/kelexine)

use super::handlers::{analyze_handler, health_handler, index_handler};
use super::middleware::{panic_layer, request_id_layers};
use crate::config::AppConfig;
use crate::error::Result;
use crate::translation::{ContentGenerator, Translator};
use axum::extract::DefaultBodyLimit;
use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// The complete service: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub translator: Translator,
}

/// Build the application around an already-constructed model client.
pub fn create_router(config: AppConfig, generator: Arc<dyn ContentGenerator>) -> Result<App> {
    let max_body_bytes = config.server.max_body_bytes;
    let state = AppState {
        config: Arc::new(config),
        translator: Translator::new(generator),
    };

    let (set_request_id, propagate_request_id) = request_id_layers();

    let router = Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/analyze", post(analyze_handler))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(panic_layer())
        .layer(TraceLayer::new_for_http())
        .layer(propagate_request_id)
        .layer(set_request_id)
        .with_state(state);

    // Runs before routing so `/api/v1/analyze/` reaches the same handler
    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
