//! GrayImage - the grayscale image container
//!
//! The `GrayImage` structure is the fundamental image type of the pipeline:
//! a single-channel raster plus its graymap metadata (dimensions, maximum
//! gray level).
//!
//! # Sample layout
//!
//! - Samples are stored in one contiguous buffer, row-major
//! - Each sample is an unsigned integer in `[0, max_gray]`
//!
//! # Ownership model
//!
//! A `GrayImage` is exclusively owned by the pipeline stage holding it.
//! `clone()` produces a structurally independent copy; mutating the copy
//! is never observable in the source.
//!
//! # See also
//!
//! C reference: `struct pgm` and `read_image()` / `init_pgm_image()`. The
//! C version allocates a pointer-to-pointer grid per image; here the grid
//! is a single owned buffer with explicit `width * y + x` indexing, and
//! bounds are enforced by the accessors rather than caller discipline.

mod border;

use crate::error::{CoreResult, Error};

/// Grayscale image container
///
/// # Examples
///
/// ```
/// use edgemap_core::GrayImage;
///
/// let img = GrayImage::new(640, 480, 255).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.sample(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Maximum gray level (typically 255)
    max_gray: u16,
    /// Row-major sample data
    samples: Vec<u16>,
}

impl GrayImage {
    /// Create a new image with every sample initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `width` or `height` is 0 and
    /// [`Error::InvalidMaxGray`] if `max_gray` is 0.
    pub fn new(width: u32, height: u32, max_gray: u16) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if max_gray == 0 {
            return Err(Error::InvalidMaxGray(max_gray));
        }
        Ok(GrayImage {
            width,
            height,
            max_gray,
            samples: vec![0u16; width as usize * height as usize],
        })
    }

    /// Create an image from an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataSizeMismatch`] if the buffer length is not
    /// `width * height`, and [`Error::SampleOutOfRange`] if any sample
    /// exceeds `max_gray`.
    pub fn from_samples(
        width: u32,
        height: u32,
        max_gray: u16,
        samples: Vec<u16>,
    ) -> CoreResult<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if max_gray == 0 {
            return Err(Error::InvalidMaxGray(max_gray));
        }
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(Error::DataSizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        if let Some(&bad) = samples.iter().find(|&&v| v > max_gray) {
            return Err(Error::SampleOutOfRange {
                value: i64::from(bad),
                max: max_gray,
            });
        }
        Ok(GrayImage {
            width,
            height,
            max_gray,
            samples,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the maximum gray level.
    #[inline]
    pub fn max_gray(&self) -> u16 {
        self.max_gray
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the sample at (x, y).
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Option<u16> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.samples[self.index(x, y)])
    }

    /// Get the sample at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn sample_unchecked(&self, x: u32, y: u32) -> u16 {
        debug_assert!(x < self.width && y < self.height);
        self.samples[y as usize * self.width as usize + x as usize]
    }

    /// Set the sample at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for coordinates outside the grid
    /// and [`Error::SampleOutOfRange`] if `val > max_gray`.
    pub fn set_sample(&mut self, x: u32, y: u32, val: u16) -> CoreResult<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if val > self.max_gray {
            return Err(Error::SampleOutOfRange {
                value: i64::from(val),
                max: self.max_gray,
            });
        }
        let idx = self.index(x, y);
        self.samples[idx] = val;
        Ok(())
    }

    /// Set the sample at (x, y) without bounds or range checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_sample_unchecked(&mut self, x: u32, y: u32, val: u16) {
        debug_assert!(x < self.width && y < self.height);
        let idx = self.index(x, y);
        self.samples[idx] = val;
    }

    /// Get a single row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u16] {
        let start = y as usize * self.width as usize;
        &self.samples[start..start + self.width as usize]
    }

    /// Get the full row-major sample buffer.
    #[inline]
    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &GrayImage) -> bool {
        self.width == other.width && self.height == other.height
    }
}
