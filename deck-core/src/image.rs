//! Asynchronous image decoding for file-based insert operations.
//!
//! Decoding is the decode phase of a two-phase flow: probe the bytes for
//! their natural dimensions and embed them as a base64 data URI, then hand
//! the [`DecodedImage`] to a single store commit. Only the commit is
//! undoable; a failed decode commits nothing.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::ImageReader;
use serde::{Deserialize, Serialize};

use crate::{DeckError, DeckResult};

/// A decoded embedded image: its data-URI encoding plus natural pixel size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedImage {
    /// Image bytes as a base64 data URI with the sniffed MIME type.
    pub data: String,
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
}

/// Decode raw image bytes off the async executor.
///
/// # Errors
///
/// Returns [`DeckError::UnsupportedImage`] when the format cannot be
/// recognized, [`DeckError::ImageDecode`] when the header is corrupt, and
/// [`DeckError::TaskJoin`] if the blocking task is cancelled.
pub async fn decode_image(bytes: Vec<u8>) -> DeckResult<DecodedImage> {
    tokio::task::spawn_blocking(move || decode_blocking(&bytes))
        .await
        .map_err(|e| DeckError::TaskJoin(e.to_string()))?
}

fn decode_blocking(bytes: &[u8]) -> DeckResult<DecodedImage> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DeckError::UnsupportedImage(e.to_string()))?;
    let format = reader
        .format()
        .ok_or_else(|| DeckError::UnsupportedImage("unrecognized image format".to_string()))?;
    let (width, height) = reader.into_dimensions()?;

    let data = format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    );
    tracing::debug!(width, height, "decoded embedded image");

    Ok(DecodedImage {
        data,
        width,
        height,
    })
}
