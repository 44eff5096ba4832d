//! Error types for overlay compositing.

/// Errors that can occur while compositing a poster.
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    /// The base poster image could not be decoded. This is the one fatal
    /// condition in the compositing path; callers must decide whether to
    /// retry with a different image or abandon the item.
    #[error("failed to decode poster image: {0}")]
    Decode(#[source] image::ImageError),

    /// The composited image could not be encoded.
    #[error("failed to encode poster image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Result type alias using [`OverlayError`].
pub type Result<T> = std::result::Result<T, OverlayError>;
