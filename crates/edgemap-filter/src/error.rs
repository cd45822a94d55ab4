//! Error types for edgemap-filter
//!
//! The C reference does not guard the filter at all; a too-small image
//! walks off the grid. The Rust API makes the 3x3 dimension precondition
//! a typed error instead.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] edgemap_core::Error),

    /// Image too small for one interior convolution pixel
    #[error("image {width}x{height} smaller than the 3x3 minimum")]
    ImageTooSmall { width: u32, height: u32 },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
