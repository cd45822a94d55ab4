//! Edgemap - Sobel edge detection for PGM graymaps
//!
//! # Overview
//!
//! Edgemap runs the classic Sobel gradient-magnitude pipeline over
//! 8/16-bit graymap images:
//!
//! - PGM I/O (plain `P2` and raw `P5` variants)
//! - Zero border padding
//! - 3x3 Sobel convolution producing magnitude, gx, and gy planes
//! - Min-max normalization onto the display range
//!
//! # Example
//!
//! ```
//! use edgemap::GrayImage;
//! use edgemap::filter::{min_max_normalize, sobel_edge_filter};
//!
//! let mut image = GrayImage::new(64, 64, 255).unwrap();
//! image.pad_border();
//!
//! let planes = sobel_edge_filter(&image).unwrap();
//! let edges = min_max_normalize(&planes.magnitude).to_gray(255).unwrap();
//! assert_eq!(edges.width(), 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use edgemap_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use edgemap_filter as filter;
pub use edgemap_io as io;
