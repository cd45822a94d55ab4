//! PGM (portable graymap) format support
//!
//! Reads and writes the two common graymap encodings: plain `P2` (ASCII
//! decimal samples) and raw `P5` (one byte per sample). Both share the
//! same text header: magic, optional `#` comment lines, then
//! `width height maxval`.
//!
//! # See also
//!
//! C reference: `read_image()`, `read_comments()`, `write_pgm_file()`

use crate::format::{PnmFormat, detect_format_from_bytes};
use crate::{IoError, IoResult};
use edgemap_core::GrayImage;
use std::io::Write;

/// Scanner over the textual header (and P2 sample body).
///
/// Treats runs of whitespace as separators and skips `#` comment lines
/// wherever a separator may appear, as `read_comments()` does.
struct TokenScanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> TokenScanner<'a> {
    fn new(data: &'a [u8], pos: usize) -> Self {
        TokenScanner { data, pos }
    }

    fn skip_separators(&mut self) {
        loop {
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.data.len() && self.data[self.pos] == b'#' {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                return;
            }
        }
    }

    fn next_token(&mut self) -> IoResult<&'a [u8]> {
        self.skip_separators();
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::InvalidData(
                "unexpected end of graymap data".to_string(),
            ));
        }
        Ok(&self.data[start..self.pos])
    }

    fn next_u32(&mut self, what: &str) -> IoResult<u32> {
        let token = self.next_token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "cannot parse {what}: {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }
}

/// Decode a graymap from an in-memory byte buffer.
///
/// The variant is detected from the magic number. The header may contain
/// `#` comment lines between tokens.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for magics other than `P2`/`P5`, or a
///   `P5` body whose `maxval` exceeds one byte
/// - [`IoError::InvalidData`] for unparseable header tokens or truncated
///   sample data
pub fn decode(data: &[u8]) -> IoResult<GrayImage> {
    let format = detect_format_from_bytes(data)?;
    let mut scan = TokenScanner::new(data, 2);

    let width = scan.next_u32("width")?;
    let height = scan.next_u32("height")?;
    let maxval = scan.next_u32("maximum gray level")?;

    if maxval == 0 || maxval > u32::from(u16::MAX) {
        return Err(IoError::InvalidData(format!(
            "maximum gray level {maxval} outside [1, 65535]"
        )));
    }
    let max_gray = maxval as u16;
    let n_samples = width as usize * height as usize;

    let samples = match format {
        PnmFormat::AsciiGray => {
            let mut samples = Vec::with_capacity(n_samples);
            for _ in 0..n_samples {
                let val = scan.next_u32("sample")?;
                if val > u32::from(u16::MAX) {
                    return Err(IoError::InvalidData(format!("sample {val} too large")));
                }
                samples.push(val as u16);
            }
            samples
        }
        PnmFormat::BinaryGray => {
            if max_gray > 255 {
                return Err(IoError::UnsupportedFormat(format!(
                    "binary graymap with maxval {max_gray} > 255"
                )));
            }
            // Exactly one whitespace byte separates maxval from the raster.
            let body = scan.pos + 1;
            if scan.pos >= data.len() || !data[scan.pos].is_ascii_whitespace() {
                return Err(IoError::InvalidData(
                    "missing separator before binary samples".to_string(),
                ));
            }
            if data.len() < body + n_samples {
                return Err(IoError::InvalidData(format!(
                    "binary sample data truncated: need {n_samples}, have {}",
                    data.len().saturating_sub(body)
                )));
            }
            data[body..body + n_samples]
                .iter()
                .map(|&b| u16::from(b))
                .collect()
        }
    };

    Ok(GrayImage::from_samples(width, height, max_gray, samples)?)
}

/// Encode an image into one of the two graymap variants.
///
/// Samples are written as-is; the image invariant guarantees they already
/// lie in `[0, max_gray]`.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for a binary encode of an image
/// whose `max_gray` exceeds one byte.
pub fn encode(image: &GrayImage, format: PnmFormat) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write!(
        out,
        "{}\n{} {}\n{}\n",
        format.magic(),
        image.width(),
        image.height(),
        image.max_gray()
    )?;

    match format {
        PnmFormat::AsciiGray => {
            for y in 0..image.height() {
                let mut first = true;
                for &val in image.row(y) {
                    if !first {
                        out.push(b' ');
                    }
                    write!(out, "{val}")?;
                    first = false;
                }
                out.push(b'\n');
            }
        }
        PnmFormat::BinaryGray => {
            if image.max_gray() > 255 {
                return Err(IoError::UnsupportedFormat(format!(
                    "binary graymap with maxval {} > 255",
                    image.max_gray()
                )));
            }
            out.extend(image.samples().iter().map(|&v| v as u8));
        }
    }

    Ok(out)
}
