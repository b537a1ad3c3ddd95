//! Error types for autoslicer-region

use thiserror::Error;

/// Errors that can occur during masking and slicing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] autoslicer_core::Error),

    /// Mask and raster dimensions differ
    #[error("mask is {}x{} but image is {}x{}", .mask.0, .mask.1, .image.0, .image.1)]
    DimensionMismatch {
        mask: (u32, u32),
        image: (u32, u32),
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
