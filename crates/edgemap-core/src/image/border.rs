//! Border padding
//!
//! Zeroes the outermost ring of an image in place so that the 3x3
//! convolution window never reads outside the grid. This is the single
//! destructive operation in the pipeline; every other stage allocates
//! fresh output. It is a structural precondition enforced once, not a
//! per-convolution bounds check.
//!
//! # See also
//!
//! C reference: `padding()`

use super::GrayImage;

impl GrayImage {
    /// Zero row 0, row `height-1`, column 0, and column `width-1` in place.
    ///
    /// Idempotent: applying it twice yields the same image as once.
    pub fn pad_border(&mut self) {
        let w = self.width();
        let h = self.height();

        for x in 0..w {
            self.set_sample_unchecked(x, 0, 0);
            self.set_sample_unchecked(x, h - 1, 0);
        }
        for y in 0..h {
            self.set_sample_unchecked(0, y, 0);
            self.set_sample_unchecked(w - 1, y, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(width: u32, height: u32, val: u16) -> GrayImage {
        GrayImage::from_samples(
            width,
            height,
            255,
            vec![val; width as usize * height as usize],
        )
        .unwrap()
    }

    #[test]
    fn test_pad_border_zeroes_ring() {
        let mut img = filled(5, 4, 200);
        img.pad_border();

        for x in 0..5 {
            assert_eq!(img.sample(x, 0), Some(0));
            assert_eq!(img.sample(x, 3), Some(0));
        }
        for y in 0..4 {
            assert_eq!(img.sample(0, y), Some(0));
            assert_eq!(img.sample(4, y), Some(0));
        }
        // Interior untouched
        assert_eq!(img.sample(2, 1), Some(200));
        assert_eq!(img.sample(3, 2), Some(200));
    }

    #[test]
    fn test_pad_border_idempotent() {
        let mut once = filled(7, 7, 123);
        once.pad_border();

        let mut twice = once.clone();
        twice.pad_border();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_pad_border_degenerate_sizes() {
        // 1x1 and 2xN images are entirely border
        let mut img = filled(1, 1, 9);
        img.pad_border();
        assert_eq!(img.sample(0, 0), Some(0));

        let mut img = filled(2, 3, 9);
        img.pad_border();
        assert!(img.samples().iter().all(|&v| v == 0));
    }
}
