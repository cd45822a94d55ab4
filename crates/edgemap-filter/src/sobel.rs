//! Sobel edge filter
//!
//! Drives the convolution engine with the Sobel kernel pair across the
//! image interior and combines the two directional derivatives into a
//! gradient magnitude. One pass fills three planes at the same
//! coordinates; none is derived from another after the fact.
//!
//! # See also
//!
//! C reference: `sobel_edge_filter()`. The reference loop runs
//! `1 <= i < height-2`, leaving the last interior row and column
//! unfiltered (an inherited off-by-one). Here the window is centered on
//! the output pixel and the loop covers the full interior symmetrically;
//! see DESIGN.md.

use crate::error::{FilterError, FilterResult};
use crate::{Kernel3, convolve};
use edgemap_core::{GradientPlane, GrayImage};

/// The three planes produced by one filter pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SobelPlanes {
    /// Gradient magnitude, `trunc(sqrt(gx^2 + gy^2))`
    pub magnitude: GradientPlane,
    /// Horizontal derivative
    pub gx: GradientPlane,
    /// Vertical derivative
    pub gy: GradientPlane,
}

/// Apply the Sobel filter, producing three fresh [`GradientPlane`]s of the
/// input's dimensions.
///
/// Non-interior cells of all three planes carry through the pre-filter
/// source intensity (a copy of the input sample, not an edge value). The
/// input is not mutated; repeated invocation on the same image is
/// bit-identical. The magnitude is truncated toward zero, matching the
/// reference's double-to-int assignment.
///
/// # Errors
///
/// Returns [`FilterError::ImageTooSmall`] if either dimension is below 3
/// (no interior pixel exists for the 3x3 window).
pub fn sobel_edge_filter(image: &GrayImage) -> FilterResult<SobelPlanes> {
    let w = image.width();
    let h = image.height();
    if w < 3 || h < 3 {
        return Err(FilterError::ImageTooSmall {
            width: w,
            height: h,
        });
    }

    let mut magnitude = GradientPlane::from_image(image);
    let mut gx_plane = GradientPlane::from_image(image);
    let mut gy_plane = GradientPlane::from_image(image);

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            // Window centered on (x, y); convolve is top-left aligned
            let gx = convolve(image, &Kernel3::SOBEL_HORIZONTAL, x - 1, y - 1);
            let gy = convolve(image, &Kernel3::SOBEL_VERTICAL, x - 1, y - 1);
            let sq = i64::from(gx) * i64::from(gx) + i64::from(gy) * i64::from(gy);
            magnitude.set(x, y, (sq as f64).sqrt() as i32);
            gx_plane.set(x, y, gx);
            gy_plane.set(x, y, gy);
        }
    }

    Ok(SobelPlanes {
        magnitude,
        gx: gx_plane,
        gy: gy_plane,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(width: u32, height: u32, samples: Vec<u16>) -> GrayImage {
        GrayImage::from_samples(width, height, 255, samples).unwrap()
    }

    #[test]
    fn test_too_small_rejected() {
        let img = image(2, 5, vec![0; 10]);
        assert!(matches!(
            sobel_edge_filter(&img),
            Err(FilterError::ImageTooSmall { width: 2, height: 5 })
        ));
        let img = image(5, 2, vec![0; 10]);
        assert!(sobel_edge_filter(&img).is_err());
    }

    #[test]
    fn test_minimum_size_accepted() {
        let img = image(3, 3, vec![0; 9]);
        let planes = sobel_edge_filter(&img).unwrap();
        assert_eq!(planes.magnitude.get(1, 1), Some(0));
    }

    #[test]
    fn test_all_zero_image() {
        let img = image(5, 5, vec![0; 25]);
        let planes = sobel_edge_filter(&img).unwrap();
        assert!(planes.magnitude.data().iter().all(|&v| v == 0));
        assert!(planes.gx.data().iter().all(|&v| v == 0));
        assert!(planes.gy.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_vertical_step_edge() {
        // Columns 0-1 dark, columns 2-4 bright, then border padding as the
        // pipeline would apply it.
        let mut samples = Vec::with_capacity(25);
        for _y in 0..5 {
            for x in 0..5u32 {
                samples.push(if x >= 2 { 255 } else { 0 });
            }
        }
        let mut img = image(5, 5, samples);
        img.pad_border();

        let planes = sobel_edge_filter(&img).unwrap();

        // The center pixel straddles the step: full kernel weight response
        assert_eq!(planes.gx.get(2, 2), Some(4 * 255));
        assert_eq!(planes.gy.get(2, 2), Some(0));
        assert_eq!(planes.magnitude.get(2, 2), Some(4 * 255));
    }

    #[test]
    fn test_full_interior_covered() {
        // A bright block against the far corner must register gradients in
        // the last interior row/column (the reference's asymmetric loop
        // missed these).
        let mut img = image(6, 6, vec![0; 36]);
        for y in 3..6 {
            for x in 3..6 {
                img.set_sample(x, y, 255).unwrap();
            }
        }
        img.pad_border();

        let planes = sobel_edge_filter(&img).unwrap();
        assert_ne!(planes.magnitude.get(4, 4), Some(img.sample(4, 4).map(i32::from).unwrap()));
        assert!(planes.magnitude.get_unchecked(4, 4) > 0);
    }

    #[test]
    fn test_border_carries_source_intensity() {
        let mut samples = vec![10u16; 25];
        samples[0] = 77; // (0, 0)
        let img = image(5, 5, samples);
        // No padding here: planes must carry the raw source value through
        let planes = sobel_edge_filter(&img).unwrap();
        assert_eq!(planes.magnitude.get(0, 0), Some(77));
        assert_eq!(planes.gx.get(0, 0), Some(77));
        assert_eq!(planes.gy.get(0, 0), Some(77));
    }

    #[test]
    fn test_magnitude_truncates() {
        // gx = 4, gy = 3 would give sqrt(25) = 5 exactly; build a case with
        // an irrational magnitude instead: gx = 255, gy = 255 ->
        // sqrt(2) * 255 = 360.62..., truncated to 360.
        let samples = vec![
            0, 0, 0, 0, 0, //
            0, 0, 0, 255, 0, //
            0, 0, 255, 255, 0, //
            0, 0, 0, 0, 0, //
            0, 0, 0, 0, 0,
        ];
        let img = image(5, 5, samples);
        let planes = sobel_edge_filter(&img).unwrap();
        for y in 1..4u32 {
            for x in 1..4u32 {
                let gx = planes.gx.get_unchecked(x, y);
                let gy = planes.gy.get_unchecked(x, y);
                let expected = ((i64::from(gx) * i64::from(gx)
                    + i64::from(gy) * i64::from(gy)) as f64)
                    .sqrt() as i32;
                assert_eq!(planes.magnitude.get_unchecked(x, y), expected);
            }
        }
    }

    #[test]
    fn test_repeated_invocation_identical() {
        let mut samples = Vec::with_capacity(49);
        for y in 0..7u32 {
            for x in 0..7u32 {
                samples.push(((x * 31 + y * 17) % 256) as u16);
            }
        }
        let mut img = image(7, 7, samples);
        img.pad_border();
        let before = img.clone();

        let first = sobel_edge_filter(&img).unwrap();
        let second = sobel_edge_filter(&img).unwrap();
        let third = sobel_edge_filter(&img).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(img, before);
    }
}
