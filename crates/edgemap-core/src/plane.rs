//! GradientPlane - signed intermediate plane
//!
//! A grid with the same geometry as its source [`GrayImage`], holding the
//! raw signed convolution accumulators (or magnitudes) before
//! normalization. Three such planes are produced per filter pass.
//!
//! # See also
//!
//! C reference: the `imageData` / `gx` / `gy` grids of the output `pgm`
//! struct, which are `int` matrices precisely because gradients go
//! negative and magnitudes exceed the gray range before normalization.

use crate::error::{CoreResult, Error};
use crate::image::GrayImage;

/// Signed plane of convolution results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientPlane {
    width: u32,
    height: u32,
    /// Row-major signed cells
    data: Vec<i32>,
}

impl GradientPlane {
    /// Create a zero-filled plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0.
    pub fn new(width: u32, height: u32) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(GradientPlane {
            width,
            height,
            data: vec![0i32; width as usize * height as usize],
        })
    }

    /// Create a plane by copying an image's samples.
    ///
    /// Cells outside the filter's interior keep these carried-through
    /// source intensities; the filter only overwrites the interior.
    ///
    /// # See also
    ///
    /// C reference: `init_pgm_image()`, which seeds all three output grids
    /// with the input samples.
    pub fn from_image(image: &GrayImage) -> Self {
        GradientPlane {
            width: image.width(),
            height: image.height(),
            data: image.samples().iter().map(|&v| i32::from(v)).collect(),
        }
    }

    /// Get the plane width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the plane height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the cell at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<i32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Get the cell at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> i32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Set the cell at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, val: i32) {
        debug_assert!(x < self.width && y < self.height);
        let idx = y as usize * self.width as usize + x as usize;
        self.data[idx] = val;
    }

    /// Get the full row-major cell buffer.
    #[inline]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Iterate over all cells mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Convert a bounded plane back into a [`GrayImage`].
    ///
    /// The caller must have normalized first: every cell has to lie in
    /// `[0, max_gray]`. The conversion does not clamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleOutOfRange`] on the first out-of-range cell.
    pub fn to_gray(&self, max_gray: u16) -> CoreResult<GrayImage> {
        let mut samples = Vec::with_capacity(self.data.len());
        for &v in &self.data {
            if v < 0 || v > i32::from(max_gray) {
                return Err(Error::SampleOutOfRange {
                    value: i64::from(v),
                    max: max_gray,
                });
            }
            samples.push(v as u16);
        }
        GrayImage::from_samples(self.width, self.height, max_gray, samples)
    }
}
