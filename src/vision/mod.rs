//! Vision and image processing module.
//!
//! Identifies the format of uploaded image bytes and resolves the MIME type
//! sent to Gemini alongside the inline image data.
//!
//! # Submodules
//!
//! - `models`: Format tag to MIME type lookup table.
//! - `detection`: Magic-byte introspection of raw uploads.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod detection;
pub mod models;

pub use detection::detect_image;
pub use models::{mime_for_format, DetectedImage, DEFAULT_MIME_TYPE};
