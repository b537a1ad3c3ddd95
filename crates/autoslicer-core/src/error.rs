//! Error types for autoslicer-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Pixel buffer length does not match the declared dimensions
    #[error("buffer length {len} does not match {width}x{height} RGBA image")]
    InvalidBufferLength { width: u32, height: u32, len: usize },

    /// Two grids that must have identical dimensions do not
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Box with inverted or empty extent
    #[error("invalid box: ({x0}, {y0}, {x1}, {y1})")]
    InvalidBox { x0: u32, y0: u32, x1: u32, y1: u32 },

    /// Box extends beyond the grid it is applied to
    #[error("box ({}, {}, {}, {}) exceeds {width}x{height} grid", .bounds.0, .bounds.1, .bounds.2, .bounds.3)]
    BoxOutOfBounds {
        bounds: (u32, u32, u32, u32),
        width: u32,
        height: u32,
    },

    /// Pixel coordinates outside the grid
    #[error("coordinates ({x}, {y}) out of bounds for {width}x{height} grid")]
    CoordsOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
