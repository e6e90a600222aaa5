//! Image → Gemini → analysis JSON translation.
//!
//! The [`Translator`] is the whole analysis pipeline: detect the MIME type,
//! build the structured-output request, call the model once, and interpret
//! the returned text. The model is reached through [`ContentGenerator`] so the
//! HTTP layer can be exercised against a fake.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod request;
pub mod response;

pub use request::{build_request, response_schema, ANALYSIS_PROMPT};
pub use response::{cap_objects, parse_model_text};

use crate::error::Result;
use crate::models::gemini::GenerateContentRequest;
use crate::vision::detect_image;
use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// A model that turns a `generateContent` request into raw output text.
pub trait ContentGenerator: Send + Sync {
    /// Issue one request. Implementations must not retry.
    fn generate(&self, request: GenerateContentRequest) -> BoxFuture<'_, Result<String>>;
}

/// Stateless analysis pipeline, cheap to clone across handlers.
#[derive(Clone)]
pub struct Translator {
    generator: Arc<dyn ContentGenerator>,
}

impl Translator {
    pub fn new(generator: Arc<dyn ContentGenerator>) -> Self {
        Self { generator }
    }

    /// Analyze one image.
    ///
    /// Fails with `InvalidImage` if `image` is not a recognizable image, and
    /// with `Provider` if the model call fails. Unparseable model output is
    /// not an error; see [`parse_model_text`].
    pub async fn analyze(&self, image: &[u8]) -> Result<Value> {
        let detected = detect_image(image)?;
        info!(
            "Analyzing {} image ({} bytes) as {}",
            detected.format,
            image.len(),
            detected.mime_type
        );

        let request = build_request(image, detected.mime_type);
        let text = self.generator.generate(request).await?;

        debug!(
            "Model output (first 500 chars): {}",
            text.chars().take(500).collect::<String>()
        );

        Ok(parse_model_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzerError;
    use crate::models::gemini::Part;
    use serde_json::json;
    use std::sync::Mutex;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    struct Recording {
        reply: std::result::Result<String, String>,
        seen: Mutex<Vec<GenerateContentRequest>>,
    }

    impl Recording {
        fn replying(reply: std::result::Result<&str, &str>) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.map(str::to_string).map_err(str::to_string),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    impl ContentGenerator for Recording {
        fn generate(&self, request: GenerateContentRequest) -> BoxFuture<'_, Result<String>> {
            self.seen.lock().unwrap().push(request);
            let reply = self.reply.clone().map_err(AnalyzerError::Provider);
            Box::pin(async move { reply })
        }
    }

    #[tokio::test]
    async fn test_png_mime_sent_downstream() {
        let generator = Recording::replying(Ok(r#"{"caption":"x","objects":[]}"#));
        let translator = Translator::new(generator.clone());

        let value = translator.analyze(PNG_HEADER).await.unwrap();
        assert_eq!(value, json!({"caption": "x", "objects": []}));

        let seen = generator.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        match &seen[0].contents[0].parts[0] {
            Part::InlineData { inline_data } => assert_eq!(inline_data.mime_type, "image/png"),
            other => panic!("expected inline data first, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_image_skips_model() {
        let generator = Recording::replying(Ok("{}"));
        let translator = Translator::new(generator.clone());

        let err = translator.analyze(b"plain text").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidImage(_)));
        assert!(generator.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_error_propagates() {
        let generator = Recording::replying(Err("quota exceeded"));
        let translator = Translator::new(generator);

        let err = translator.analyze(PNG_HEADER).await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Provider(ref m) if m == "quota exceeded"));
    }

    #[tokio::test]
    async fn test_plain_text_output_falls_back() {
        let generator = Recording::replying(Ok("Just a sunset."));
        let translator = Translator::new(generator);

        let value = translator.analyze(PNG_HEADER).await.unwrap();
        assert_eq!(
            value,
            json!({"caption": "Just a sunset.", "objects": [], "safety_notes": ""})
        );
    }
}
