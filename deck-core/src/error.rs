//! Error types for deck operations.

use thiserror::Error;

/// Result type for deck operations.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors that can occur in deck operations.
///
/// No-op conditions (no active slide, unknown element id, unknown template)
/// are deliberately not errors; the fallible surfaces are asynchronous image
/// decoding and document (de)serialization.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The image bytes could not be decoded.
    #[error("Image decode failed: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The image format could not be recognized.
    #[error("Unsupported image data: {0}")]
    UnsupportedImage(String),

    /// The background decode task was cancelled or panicked.
    #[error("Decode task failed: {0}")]
    TaskJoin(String),

    /// Document serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
