//! Error types for the rendering pipeline.
//!
//! Every error is terminal for the current invocation: nothing is retried,
//! and the binary reports the message and exits non-zero.

use std::path::PathBuf;

/// Errors that can occur while decoding, transforming, or emitting an image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The image path does not exist or is not a readable file
    #[error("File '{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    /// The file exists but could not be decoded as an image
    #[error("Failed to decode '{}': {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A configuration value or resolved dimension is out of range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Unexpected fault while transforming pixels or emitting lines
    #[error("Internal failure: {0}")]
    Internal(String),

    /// Writing to the output stream failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// Shorthand for building an [`RenderError::InvalidParameter`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        RenderError::InvalidParameter(msg.into())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;
