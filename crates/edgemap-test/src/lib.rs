//! edgemap-test - Regression test framework
//!
//! A small harness for the workspace's `*_reg.rs` tests, supporting three
//! modes:
//!
//! - **Generate**: create golden files for comparison
//! - **Compare**: compare results with golden files (default)
//! - **Display**: run tests without comparison
//!
//! # Usage
//!
//! ```ignore
//! use edgemap_test::{RegParams, load_test_image};
//!
//! let mut rp = RegParams::new("sobel");
//! rp.compare_values(255.0, max as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a test image from the test data directory.
///
/// # Arguments
///
/// * `name` - Image filename (e.g., "ramp.pgm")
pub fn load_test_image(name: &str) -> TestResult<edgemap_core::GrayImage> {
    let path = test_data_path(name);
    edgemap_io::read_graymap(&path).map_err(|e| TestError::ImageLoad {
        path: path.clone(),
        message: e.to_string(),
    })
}

/// Get the path to the workspace root.
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // edgemap-test is at crates/edgemap-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file.
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/images/{}", workspace_root(), name)
}

/// Get the path to the golden files directory.
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
