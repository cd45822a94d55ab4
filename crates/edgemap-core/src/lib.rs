//! edgemap-core - Core data structures for the Sobel edge pipeline
//!
//! This crate provides the in-memory data model shared by every pipeline
//! stage:
//!
//! - [`GrayImage`]: grayscale raster plus graymap metadata
//! - [`GradientPlane`]: signed intermediate plane for convolution results
//! - Border padding ([`GrayImage::pad_border`])

mod error;
mod image;
mod plane;

pub use error::{CoreResult, Error};
pub use image::GrayImage;
pub use plane::GradientPlane;
