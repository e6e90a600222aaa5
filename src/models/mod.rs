//! Data models for the HTTP surface and the Gemini API.
//!
//! This module contains the type definitions for request/response bodies used by:
//! - The analysis results returned to clients (`analysis`)
//! - The upstream Google Gemini API (`gemini`)

// Author: kelexine (https://github.com/kelexine)

pub mod analysis;
pub mod gemini;

pub use analysis::{AnalysisResult, DetectedObject, ErrorPayload, MAX_OBJECTS};
pub use gemini::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
