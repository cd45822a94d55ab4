//! I/O error types
//!
//! Provides a unified error type for graymap decoding and encoding.
//! Callers only need to handle one error type regardless of whether the
//! failure came from the filesystem, the container grammar, or the core
//! image constructors.
//!
//! # See also
//!
//! C reference: `read_image()` prints a message and returns on failure,
//! leaving the caller with a half-initialized struct. The Rust API makes
//! every failure a typed, propagated error instead.

use thiserror::Error;

/// Error type for graymap I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container variant is not one we read or write
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The header or sample data is structurally invalid
    #[error("invalid graymap data: {0}")]
    InvalidData(String),

    /// An error from the core library (dimensions, sample ranges)
    #[error("core error: {0}")]
    Core(#[from] edgemap_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
