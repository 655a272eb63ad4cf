//! Error type shared by scene construction, render setup and image output.

use thiserror::Error;

/// Everything that can go wrong before or after the (infallible) trace itself.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Width or height is zero.
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// Field of view outside (0, pi).
    #[error("field of view must lie strictly between 0 and pi radians, got {0}")]
    InvalidFieldOfView(f32),

    /// Far plane not positive or not finite.
    #[error("far plane must be positive and finite, got {0}")]
    InvalidFarPlane(f32),

    /// Sphere radius not positive or not finite.
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    /// Recursion depth of zero.
    #[error("maximum recursion depth must be at least 1")]
    InvalidMaxDepth,

    /// Output extension with no matching encoder.
    #[error("unsupported output format '{0}' (expected .jpg, .jpeg, .png or .exr)")]
    UnsupportedFormat(String),

    /// JPEG or PNG encoding failed.
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),

    /// EXR writing failed.
    #[error("failed to write EXR image: {0}")]
    Exr(#[from] exr::error::Error),

    /// File creation or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RenderError>;
