use mosaic_quantize::QuantizeError;
use thiserror::Error;

use crate::models::ConfigError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("No image provided")]
    NoImage,

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Unsupported size class: {0}")]
    UnsupportedSize(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("Preview error: {0}")]
    Preview(#[from] PreviewError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Stable machine-readable code for reporting to callers.
    pub fn code(&self) -> &'static str {
        match self {
            ConvertError::NoImage => "NO_IMAGE_BODY",
            ConvertError::InvalidImage(_) => "INVALID_IMAGE",
            ConvertError::UnsupportedSize(_) => "UNSUPPORTED_SIZE",
            ConvertError::Config(_) => "CONFIG_ERROR",
            ConvertError::Quantize(QuantizeError::InvalidSelector { .. }) => "INVALID_SELECTOR",
            ConvertError::Quantize(_) => "QUANTIZE_ERROR",
            ConvertError::Preview(_) => "PREVIEW_ERROR",
            ConvertError::Io(_) => "IO_ERROR",
        }
    }

    /// Whether the failure comes from the caller's input rather than the host.
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ConvertError::NoImage
                | ConvertError::InvalidImage(_)
                | ConvertError::UnsupportedSize(_)
                | ConvertError::Quantize(QuantizeError::InvalidSelector { .. })
        )
    }
}

#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
