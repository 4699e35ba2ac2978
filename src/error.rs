//! Error types for surface loading and scaling.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or rescaling a display surface.
///
/// These never escape an [`ImageWindow`](crate::sync::ImageWindow): the window logs
/// them and keeps whatever it was showing before.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// Image file could not be read.
    #[error("failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image data could not be decoded.
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Animated image decoded to zero frames.
    #[error("animation has no frames: {path}")]
    EmptyAnimation { path: PathBuf },

    /// Scale factor was zero, negative or not finite.
    #[error("scale factor must be positive and finite, got {factor}")]
    InvalidScale { factor: f32 },
}
