//! Error types for the constellation core.

use thiserror::Error;

/// Errors produced by field and rendering operations.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Width or height was zero when creating or resizing a field or raster.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
