// Analysis result types returned to HTTP clients
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Upper bound on the number of object categories in a result.
pub const MAX_OBJECTS: usize = 5;

/// Structured description of an image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub caption: String,
    pub objects: Vec<DetectedObject>,
    #[serde(default)]
    pub safety_notes: String,
}

impl AnalysisResult {
    /// Degraded result used when the model output is not JSON.
    pub fn fallback(raw_text: impl Into<String>) -> Self {
        Self {
            caption: raw_text.into(),
            objects: Vec::new(),
            safety_notes: String::new(),
        }
    }
}

/// One object category and how many instances were seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedObject {
    pub label: String,
    pub count: i64,
}

/// Body of every failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub error: String,
}
