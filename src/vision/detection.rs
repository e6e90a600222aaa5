// Image format detection
// Author: kelexine (https://github.com/kelexine)

use super::models::{mime_for_format, DetectedImage};
use crate::error::{AnalyzerError, Result};
use infer::MatcherType;

/// Identify the image format of `data` from its magic bytes.
///
/// Any recognized image is accepted; formats outside the MIME table fall back
/// to `image/jpeg`. Bytes that are not an image at all are rejected.
pub fn detect_image(data: &[u8]) -> Result<DetectedImage> {
    let kind = infer::get(data)
        .filter(|kind| kind.matcher_type() == MatcherType::Image)
        .ok_or_else(|| {
            AnalyzerError::InvalidImage(format!(
                "cannot identify image file ({} bytes)",
                data.len()
            ))
        })?;

    let format = kind.extension().to_ascii_uppercase();
    let mime_type = mime_for_format(Some(&format));

    Ok(DetectedImage { format, mime_type })
}
