//! edgemap-io - Graymap I/O
//!
//! Decodes and encodes the PGM container variants used by the pipeline:
//! plain `P2` and raw `P5`. The whole file is read into memory before
//! decoding; encoding produces the complete byte buffer before anything
//! touches the filesystem, so a failed encode never leaves a partial
//! output file behind.

mod error;
mod format;
mod pgm;

pub use error::{IoError, IoResult};
pub use format::{PnmFormat, detect_format, detect_format_from_bytes};
pub use pgm::{decode, encode};

use edgemap_core::GrayImage;
use std::fs;
use std::path::Path;

/// Read a graymap file into a [`GrayImage`].
///
/// # Errors
///
/// [`IoError::Io`] if the file cannot be read; decode errors as in
/// [`decode`].
pub fn read_graymap<P: AsRef<Path>>(path: P) -> IoResult<GrayImage> {
    let data = fs::read(path)?;
    decode(&data)
}

/// Write a [`GrayImage`] to a file in the given graymap variant.
///
/// The image is fully encoded in memory first; nothing is written on an
/// encode failure.
pub fn write_graymap<P: AsRef<Path>>(
    path: P,
    image: &GrayImage,
    format: PnmFormat,
) -> IoResult<()> {
    let bytes = encode(image, format)?;
    fs::write(path, bytes)?;
    Ok(())
}
