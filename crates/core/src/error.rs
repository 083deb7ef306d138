//! Error types for the shape-scatter core.

use thiserror::Error;

/// Errors produced by sprite, canvas, and batch operations.
#[derive(Debug, Error)]
pub enum ScatterError {
    /// Width or height was zero when creating a sprite or canvas.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The requested output canvas is not square.
    #[error("canvas must be square, got {width}x{height}")]
    NonSquareCanvas { width: u32, height: u32 },

    /// The normalized sprite does not fit inside the canvas.
    #[error("sprite of side {sprite} does not fit in canvas of side {canvas}")]
    SpriteExceedsCanvas { sprite: u32, canvas: u32 },

    /// A raw pixel buffer did not match the declared dimensions.
    #[error("dimension mismatch: expected {expected} pixels for {width}x{height}, got {got}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        expected: usize,
        got: usize,
    },

    /// A geometric transform produced degenerate dimensions.
    #[error("transform failed: {0}")]
    Transform(String),

    /// A sprite source image could not be read or cropped.
    #[error("failed to load sprite from '{path}': {reason}")]
    SourceLoad { path: String, reason: String },

    /// A finished canvas could not be persisted.
    #[error("failed to export canvas to '{destination}': {reason}")]
    Export { destination: String, reason: String },

    /// A placement or batch parameter was out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),
}
