//! Convolution engine
//!
//! Applies a fixed 3x3 kernel at a single grid position and returns the
//! signed accumulator. Pure and unclamped; the Sobel driver owns the
//! iteration bounds.
//!
//! # See also
//!
//! C reference: `convolution()`

use crate::Kernel3;
use edgemap_core::GrayImage;

/// Compute the 3x3 weighted sum with the kernel's top-left cell aligned
/// at `(x, y)`:
///
/// `sum = Σ_{i,j in 0..3} image[y+i][x+j] * kernel[i][j]`
///
/// No clamping is applied; the result may be negative or exceed the gray
/// range.
///
/// # Preconditions
///
/// `x + 2 < width` and `y + 2 < height`, guaranteed by the caller's
/// iteration bounds and debug-asserted here.
#[inline]
pub fn convolve(image: &GrayImage, kernel: &Kernel3, x: u32, y: u32) -> i32 {
    debug_assert!(x + 2 < image.width() && y + 2 < image.height());
    let mut sum = 0i32;
    for i in 0..3u32 {
        for j in 0..3u32 {
            sum += i32::from(image.sample_unchecked(x + j, y + i))
                * kernel.weight(i as usize, j as usize);
        }
    }
    sum
}
