//! Error types for stencil-renderer.

use thiserror::Error;

/// All errors that can arise from renderer construction and envelope I/O.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A marker pattern failed to compile.
    #[error("marker pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON envelope encode/decode error.
    #[error("envelope serialization error: {0}")]
    Envelope(#[from] serde_json::Error),

    /// I/O failure while reading or writing an envelope.
    #[error("envelope io error: {0}")]
    Io(#[from] std::io::Error),
}
