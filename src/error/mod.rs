// Error types for gemvision
// Author: kelexine (https://github.com/kelexine)

use crate::models::ErrorPayload;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Prefix placed in front of every 500 error message returned to clients.
pub const LLM_ERROR_PREFIX: &str = "Error retrieving response from LLM. Error:";

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("No image bytes in request body")]
    EmptyBody,

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Gemini API error: {0}")]
    Provider(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalyzerError {
    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalyzerError::EmptyBody => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the `error` field of the response body.
    pub fn client_message(&self) -> String {
        match self {
            AnalyzerError::EmptyBody => self.to_string(),
            _ => format!("{} {}", LLM_ERROR_PREFIX, self),
        }
    }
}

// Every failure leaves the server as `{ "error": "..." }`
impl IntoResponse for AnalyzerError {
    fn into_response(self) -> Response {
        let body = ErrorPayload {
            error: self.client_message(),
        };
        (self.status_code(), axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
