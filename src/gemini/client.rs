// Gemini API client
// Author: kelexine (https://github.com/kelexine)

use crate::config::GeminiConfig;
use crate::error::{AnalyzerError, Result};
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::translation::ContentGenerator;
use crate::utils::logging::sanitize;
use futures::future::BoxFuture;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Client for the public Google Gemini API.
///
/// Holds the API key and a pooled HTTP client. Built once at startup and
/// shared read-only by every request.
pub struct GeminiClient {
    http_client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// A request timeout is applied only when `timeout_seconds` is configured.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .use_rustls_tls();

        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder
            .build()
            .map_err(|e| AnalyzerError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client for {}", config.api_base_url);

        Ok(Self {
            http_client,
            config: config.clone(),
        })
    }

    /// Model used for every request.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Call Gemini `generateContent` once. Errors are returned immediately.
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        let url = self.endpoint();
        debug!("Calling generateContent API for model: {}", self.config.model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.expose())
            .json(request)
            .send()
            .await
            .map_err(|e| AnalyzerError::Provider(format!("HTTP error: {}", sanitize(&e.to_string()))))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| AnalyzerError::Provider(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = Self::extract_error_message(&response_text)
                .unwrap_or_else(|| response_text.clone());
            error!(
                "Gemini API error: HTTP {} - Response body: {}",
                status,
                sanitize(&response_text)
            );
            return Err(AnalyzerError::Provider(format!(
                "HTTP {}: {}",
                status.as_u16(),
                sanitize(&message)
            )));
        }

        debug!(
            "Raw Gemini response (first 500 chars): {}",
            response_text.chars().take(500).collect::<String>()
        );

        serde_json::from_str(&response_text).map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            AnalyzerError::Provider(format!("Response parsing error: {}", e))
        })
    }

    /// Call the model and return its text output.
    ///
    /// A response without text (blocked prompt, empty candidate) yields an
    /// empty string, which the caller treats as unparseable output.
    pub async fn generate_text(&self, request: GenerateContentRequest) -> Result<String> {
        let response = self.generate_content(&request).await?;

        if let Some(usage) = &response.usage_metadata {
            debug!(
                "Token usage: prompt={:?} output={:?} total={:?}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        match response.text() {
            Some(text) => Ok(text),
            None => {
                warn!(
                    "Gemini returned no text (reason: {})",
                    response.stop_reason().unwrap_or("unknown")
                );
                Ok(String::new())
            }
        }
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(serde::Deserialize)]
        struct ErrorResponse {
            error: Option<ErrorDetail>,
        }

        #[derive(serde::Deserialize)]
        struct ErrorDetail {
            message: Option<String>,
            status: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            if let Some(error) = error_resp.error {
                return error.message.or(error.status);
            }
        }
        None
    }
}

impl ContentGenerator for GeminiClient {
    fn generate(&self, request: GenerateContentRequest) -> BoxFuture<'_, Result<String>> {
        Box::pin(self.generate_text(request))
    }
}
