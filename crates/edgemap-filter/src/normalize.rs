//! Min-max intensity normalization
//!
//! Rescales an arbitrary-range signed plane linearly onto the 0-255
//! display range using the plane's own observed bounds. Two full
//! traversals by necessity: the bounds are data-dependent, so the scan
//! cannot be fused with the rescale.
//!
//! # See also
//!
//! C reference: `min_max_normalization()`. Two fixes over the reference,
//! recorded in DESIGN.md: the min/max scan updates both bounds for every
//! cell (the reference's `else if` could miss a max), and a constant
//! plane maps to all zeros instead of dividing by zero.

use edgemap_core::GradientPlane;

/// Rescale a plane onto `[0, 255]` as a fresh plane:
///
/// `out = floor(255 * (v - min) / (max - min))`
///
/// Cells holding the minimum map to 0 and the maximum to 255. A constant
/// plane (`max == min`) yields all zeros by defined policy.
pub fn min_max_normalize(plane: &GradientPlane) -> GradientPlane {
    let mut min = i32::MAX;
    let mut max = i32::MIN;
    for &v in plane.data() {
        min = min.min(v);
        max = max.max(v);
    }

    let mut out = plane.clone();
    if min == max {
        out.data_mut().fill(0);
        return out;
    }

    let range = i64::from(max) - i64::from(min);
    for v in out.data_mut() {
        *v = (255 * (i64::from(*v) - i64::from(min)) / range) as i32;
    }
    out
}
