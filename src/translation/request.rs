// Request translation (image bytes → Gemini)
// Author: kelexine (https://github.com/kelexine)

use crate::models::gemini::{Content, GenerateContentRequest, GenerationConfig, InlineData, Part};
use base64::Engine;
use serde_json::{json, Value};

/// Instruction sent after the image in every analysis request.
pub const ANALYSIS_PROMPT: &str = concat!(
    "Return a concise analysis of the image as JSON with exactly these fields:\n",
    r#"{ "caption": string, "#,
    r#""objects": [{"label": string, "count": integer}], "#,
    r#""safety_notes": string }"#,
    "\n",
    "Rules: Don't invent details. If unsure, use 'unknown'. ",
    "Limit 'objects' to at most 5 categories with integer counts."
);

/// Output schema in Gemini's OpenAPI subset.
///
/// `caption` and `objects` are required; `safety_notes` is optional.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "caption": { "type": "STRING" },
            "objects": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "label": { "type": "STRING" },
                        "count": { "type": "INTEGER" }
                    },
                    "required": ["label", "count"],
                    "propertyOrdering": ["label", "count"]
                }
            },
            "safety_notes": { "type": "STRING" }
        },
        "required": ["caption", "objects"],
        "propertyOrdering": ["caption", "objects", "safety_notes"]
    })
}

/// Build the single-turn request: image part, then the instruction text.
pub fn build_request(image: &[u8], mime_type: &str) -> GenerateContentRequest {
    let data = base64::engine::general_purpose::STANDARD.encode(image);

    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data,
                    },
                },
                Part::text(ANALYSIS_PROMPT),
            ],
        }],
        generation_config: Some(GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(response_schema()),
        }),
    }
}
