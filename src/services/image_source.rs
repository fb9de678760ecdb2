use std::path::Path;
use std::sync::OnceLock;

use base64::Engine;
use image::DynamicImage;
use regex::Regex;

use crate::error::ConvertError;

/// Browser-style `data:image/<type>[;params],<payload>` prefix
fn data_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)^data:image/(?<type>[^;,]+)(?:;[^,]*)?,(?<data>.*)$")
            .expect("data URL pattern is valid")
    })
}

/// Split an optional data-URL prefix from a base64 payload.
///
/// Returns the declared image type (e.g. `png`) when a prefix is present,
/// and the payload. Input without a prefix is returned whole.
pub fn split_data_url(input: &str) -> (Option<&str>, &str) {
    let input = input.trim();
    match data_url_pattern().captures(input) {
        Some(caps) => {
            let media = caps.name("type").map(|m| m.as_str());
            let data = caps.name("data").map_or("", |m| m.as_str());
            (media, data)
        }
        None => (None, input),
    }
}

/// Decode a base64 image, with or without a data-URL prefix.
pub fn decode_base64_image(input: &str) -> Result<DynamicImage, ConvertError> {
    let (media, payload) = split_data_url(input);
    let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if payload.is_empty() {
        return Err(ConvertError::NoImage);
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| ConvertError::InvalidImage(format!("base64: {e}")))?;

    tracing::debug!(media_type = ?media, bytes = bytes.len(), "Decoded base64 image");
    decode_image_bytes(&bytes)
}

/// Decode encoded image bytes (PNG, JPEG, ...).
pub fn decode_image_bytes(bytes: &[u8]) -> Result<DynamicImage, ConvertError> {
    if bytes.is_empty() {
        return Err(ConvertError::NoImage);
    }
    image::load_from_memory(bytes).map_err(|e| ConvertError::InvalidImage(e.to_string()))
}

/// Load an image file. Files holding a base64 data URL are accepted too.
pub fn load_image_file(path: &Path) -> Result<DynamicImage, ConvertError> {
    let bytes = std::fs::read(path)?;
    if bytes.starts_with(b"data:image/") {
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| ConvertError::InvalidImage(format!("data URL: {e}")))?;
        return decode_base64_image(text);
    }
    decode_image_bytes(&bytes)
}
