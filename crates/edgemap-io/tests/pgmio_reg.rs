//! PGM read/write regression test
//!
//! Tests format detection, decoding of both graymap variants, in-memory
//! round trips, and golden-file comparison of encoder output.

use edgemap_io::{PnmFormat, decode, detect_format, encode, read_graymap};
use edgemap_test::{RegParams, load_test_image, test_data_path};

#[test]
fn pgmio_reg() {
    let mut rp = RegParams::new("pgmio");

    // --- Test 1: plain (P2) graymap with a comment line ---
    let ramp = load_test_image("ramp.pgm").expect("load ramp.pgm");
    rp.compare_values(8.0, ramp.width() as f64, 0.0);
    rp.compare_values(8.0, ramp.height() as f64, 0.0);
    rp.compare_values(255.0, ramp.max_gray() as f64, 0.0);
    rp.compare_values(0.0, ramp.sample(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(252.0, ramp.sample(7, 7).unwrap() as f64, 0.0);

    let fmt = detect_format(test_data_path("ramp.pgm")).expect("detect ramp");
    rp.compare_values(1.0, if fmt == PnmFormat::AsciiGray { 1.0 } else { 0.0 }, 0.0);

    // --- Test 2: raw (P5) graymap ---
    let blocks = read_graymap(&test_data_path("blocks.pgm")).expect("load blocks.pgm");
    rp.compare_values(4.0, blocks.width() as f64, 0.0);
    rp.compare_values(4.0, blocks.height() as f64, 0.0);
    rp.compare_values(0.0, blocks.sample(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(255.0, blocks.sample(2, 0).unwrap() as f64, 0.0);

    let fmt = detect_format(test_data_path("blocks.pgm")).expect("detect blocks");
    rp.compare_values(1.0, if fmt == PnmFormat::BinaryGray { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: cross-variant round trips in memory ---
    let bytes = encode(&ramp, PnmFormat::BinaryGray).expect("encode binary");
    let back = decode(&bytes).expect("decode binary");
    rp.compare_images(&ramp, &back);

    let bytes = encode(&blocks, PnmFormat::AsciiGray).expect("encode ascii");
    let back = decode(&bytes).expect("decode ascii");
    rp.compare_images(&blocks, &back);

    // --- Test 4: encoder output is stable against golden files ---
    rp.write_image_and_check(&ramp, PnmFormat::AsciiGray)
        .expect("write ramp");
    rp.write_image_and_check(&blocks, PnmFormat::BinaryGray)
        .expect("write blocks");

    assert!(rp.cleanup(), "pgmio regression test failed");
}
