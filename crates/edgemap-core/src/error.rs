//! Error types for edgemap-core
//!
//! Provides a unified error type for all operations in the core crate.
//! The C reference signals failure with printf + early return; this module
//! replaces those paths with Rust's `Result<T, Error>` pattern.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid maximum gray level
    #[error("invalid maximum gray level: {0}")]
    InvalidMaxGray(u16),

    /// Coordinates outside the image grid
    #[error("index out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Sample value outside `[0, max_gray]`
    #[error("sample value {value} outside [0, {max}]")]
    SampleOutOfRange { value: i64, max: u16 },

    /// Sample buffer length does not match the declared dimensions
    #[error("sample buffer length mismatch: expected {expected}, got {actual}")]
    DataSizeMismatch { expected: usize, actual: usize },
}

/// Result type alias for core operations
pub type CoreResult<T> = std::result::Result<T, Error>;
