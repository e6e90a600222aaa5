// Vision models and types
// Author: kelexine (https://github.com/kelexine)

use phf::phf_map;

/// MIME type used for any image whose format is not listed below.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// Detected format tag (upper case) to MIME type sent to Gemini.
static MIME_BY_FORMAT: phf::Map<&'static str, &'static str> = phf_map! {
    "JPEG" => "image/jpeg",
    "JPG" => "image/jpeg",
    "PNG" => "image/png",
    "WEBP" => "image/webp",
    "HEIC" => "image/heic",
    "HEIF" => "image/heif",
};

/// Map a format tag to a MIME type. Unknown or absent tags become `image/jpeg`.
pub fn mime_for_format(format: Option<&str>) -> &'static str {
    format
        .map(|f| f.trim().to_ascii_uppercase())
        .and_then(|f| MIME_BY_FORMAT.get(f.as_str()).copied())
        .unwrap_or(DEFAULT_MIME_TYPE)
}

/// Image format as reported by byte-level introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedImage {
    /// Upper-case format tag, e.g. `PNG` or `GIF`.
    pub format: String,
    /// MIME type resolved through the lookup table.
    pub mime_type: &'static str,
}
