//! Convolution kernels
//!
//! The pipeline uses exactly two kernels, the orthogonal Sobel pair, so
//! the kernel type is a fixed 3x3 integer matrix rather than a general
//! sized kernel.
//!
//! # See also
//!
//! C reference: the `mx` / `my` locals in `sobel_edge_filter()`

/// A fixed 3x3 integer convolution kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel3 {
    /// Kernel weights, `data[row][col]`
    data: [[i32; 3]; 3],
}

impl Kernel3 {
    /// Sobel kernel approximating the horizontal intensity derivative.
    pub const SOBEL_HORIZONTAL: Kernel3 = Kernel3::new([[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]);

    /// Sobel kernel approximating the vertical intensity derivative.
    pub const SOBEL_VERTICAL: Kernel3 = Kernel3::new([[-1, -2, -1], [0, 0, 0], [1, 2, 1]]);

    /// Create a kernel from explicit weights.
    pub const fn new(data: [[i32; 3]; 3]) -> Self {
        Kernel3 { data }
    }

    /// Get the weight at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` exceeds 2.
    #[inline]
    pub fn weight(&self, row: usize, col: usize) -> i32 {
        self.data[row][col]
    }
}
