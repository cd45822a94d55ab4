//! edgemap-filter - Sobel edge detection pipeline stages
//!
//! This crate provides the algorithmic core of the pipeline:
//!
//! - Fixed 3x3 integer kernels (the Sobel pair)
//! - The pure convolution engine
//! - The Sobel driver producing magnitude / gx / gy planes
//! - Min-max normalization onto the display range

mod convolve;
mod error;
mod kernel;
mod normalize;
mod sobel;

pub use convolve::convolve;
pub use error::{FilterError, FilterResult};
pub use kernel::Kernel3;
pub use normalize::min_max_normalize;
pub use sobel::{SobelPlanes, sobel_edge_filter};
