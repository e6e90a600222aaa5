// Shared helpers for integration tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use futures::future::BoxFuture;
use gemvision::config::{ApiKey, AppConfig};
use gemvision::error::{AnalyzerError, Result};
use gemvision::models::gemini::{GenerateContentRequest, Part};
use gemvision::server::{create_router, App};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// 1x1 transparent PNG
pub const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F, 0x15, 0xC4,
    0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0x64, 0xF8, 0xCF, 0x50,
    0x0F, 0x00, 0x03, 0x86, 0x01, 0x80, 0x5A, 0x34, 0x7D, 0x6B, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45,
    0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Minimal GIF89a header: an image, but outside the MIME table.
pub const GIF_HEADER: &[u8] = b"GIF89a\x01\x00\x01\x00\x80\x00\x00\xff\xff\xff\x00\x00\x00;";

/// Model stand-in that records every request and replies with a fixed outcome.
pub struct FakeModel {
    reply: std::result::Result<String, String>,
    requests: Mutex<Vec<GenerateContentRequest>>,
}

impl FakeModel {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// MIME types of the inline images in every recorded request.
    pub fn mime_types(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .flat_map(|req| req.contents.iter())
            .flat_map(|content| content.parts.iter())
            .filter_map(|part| match part {
                Part::InlineData { inline_data } => Some(inline_data.mime_type.clone()),
                _ => None,
            })
            .collect()
    }
}

impl gemvision::translation::ContentGenerator for FakeModel {
    fn generate(&self, request: GenerateContentRequest) -> BoxFuture<'_, Result<String>> {
        self.requests.lock().unwrap().push(request);
        let reply = self.reply.clone().map_err(AnalyzerError::Provider);
        Box::pin(async move { reply })
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.gemini.api_key = ApiKey::new("test-key");
    config
}

pub fn app_with(model: Arc<FakeModel>) -> App {
    create_router(test_config(), model).expect("router builds")
}

pub async fn post_bytes(app: App, uri: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: App, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn send(app: App, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).expect("response body is JSON");
    (status, json)
}
