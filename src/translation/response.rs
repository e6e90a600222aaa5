// Response translation (Gemini text → analysis JSON)
// Author: kelexine (https://github.com/kelexine)

use crate::models::analysis::{AnalysisResult, MAX_OBJECTS};
use serde_json::Value;
use tracing::{debug, warn};

/// Interpret the model's text output.
///
/// Valid JSON is returned as-is (fields are not type-checked) apart from the
/// `objects` cap. Anything else becomes the fallback result with the raw text
/// as caption. This function never fails.
pub fn parse_model_text(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(mut value) => {
            cap_objects(&mut value);
            value
        }
        Err(e) => {
            warn!("Model output is not valid JSON ({}), using raw text as caption", e);
            fallback_value(text)
        }
    }
}

/// Truncate an over-long `objects` array to `MAX_OBJECTS` entries.
pub fn cap_objects(value: &mut Value) {
    if let Some(objects) = value.get_mut("objects").and_then(Value::as_array_mut) {
        if objects.len() > MAX_OBJECTS {
            debug!("Truncating {} objects to {}", objects.len(), MAX_OBJECTS);
            objects.truncate(MAX_OBJECTS);
        }
    }
}

fn fallback_value(text: &str) -> Value {
    // Serializing a struct of strings and an empty Vec cannot fail
    serde_json::to_value(AnalysisResult::fallback(text)).unwrap_or(Value::Null)
}
