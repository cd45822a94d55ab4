//! Graymap format detection
//!
//! Detects the container variant by examining the magic number at the
//! start of the file.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Magic numbers for the supported graymap variants
mod magic {
    /// ASCII (plain) graymap
    pub const PGM_ASCII: &[u8] = b"P2";

    /// Binary (raw) graymap
    pub const PGM_BINARY: &[u8] = b"P5";
}

/// Graymap container variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PnmFormat {
    /// `P2` - samples as ASCII decimal tokens
    AsciiGray,
    /// `P5` - one raw byte per sample
    #[default]
    BinaryGray,
}

impl PnmFormat {
    /// Get the magic string for this variant.
    pub fn magic(self) -> &'static str {
        match self {
            Self::AsciiGray => "P2",
            Self::BinaryGray => "P5",
        }
    }

    /// Get the file extension for this variant.
    pub fn extension(self) -> &'static str {
        "pgm"
    }
}

/// Detect the graymap variant from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<PnmFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 2];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect the graymap variant from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<PnmFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    match &data[..2] {
        m if m == magic::PGM_ASCII => Ok(PnmFormat::AsciiGray),
        m if m == magic::PGM_BINARY => Ok(PnmFormat::BinaryGray),
        other => Err(IoError::UnsupportedFormat(format!(
            "unknown graymap magic: {:?}",
            String::from_utf8_lossy(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_ascii() {
        assert_eq!(
            detect_format_from_bytes(b"P2\n3 3\n255\n").unwrap(),
            PnmFormat::AsciiGray
        );
    }

    #[test]
    fn test_detect_binary() {
        assert_eq!(
            detect_format_from_bytes(b"P5\n100 100\n255\n").unwrap(),
            PnmFormat::BinaryGray
        );
    }

    #[test]
    fn test_detect_unsupported_pnm() {
        // Bitmap and pixmap variants are out of scope
        assert!(matches!(
            detect_format_from_bytes(b"P4\n8 8\n"),
            Err(IoError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(b"P6\n8 8\n255\n"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_detect_unknown() {
        assert!(detect_format_from_bytes(b"XYZZY").is_err());
    }

    #[test]
    fn test_detect_short_input() {
        assert!(matches!(
            detect_format_from_bytes(b"P"),
            Err(IoError::InvalidData(_))
        ));
    }
}
