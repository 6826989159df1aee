//! Error types for scene construction and output.

use thiserror::Error;

/// Errors surfaced while building a scene, rendering it, or writing the result.
///
/// Nothing that happens while a ray is being traced is an error: misses and exhausted
/// recursion budgets fall back to the background colour.
#[derive(Error, Debug)]
pub enum Error {
    /// A vector that must define a direction has (nearly) zero length.
    #[error("{0} must not be a zero-length vector")]
    DegenerateVector(&'static str),

    /// A radius, side length, or scale factor is zero, negative, or not finite.
    #[error("{name} must be positive and finite, got {value}")]
    NonPositiveSize { name: &'static str, value: f64 },

    /// The camera's look-at point, location, and up vector do not define a frame.
    #[error("degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    /// A field of view that is not a positive, finite tangent.
    #[error("field of view must be positive and finite, got {0}")]
    InvalidFov(f64),

    /// A pigment image whose pixel count disagrees with its dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// render() was called before a camera was set.
    #[error("scene has no camera")]
    MissingCamera,

    /// A raster with zero width or height.
    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    EmptyRaster { width: usize, height: usize },

    /// Writing an image failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for scene construction and output.
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with NonPositiveSize unless value is positive and finite.
pub fn check_positive(name: &'static str, value: f64) -> Result<f64> {
    if value > 0.0 && value.is_finite() {
        Ok(value)
    }
    else {
        Err(Error::NonPositiveSize {name, value})
    }
}
