//! RustEAN - EAN-13/UPC-A barcode recovery from noisy photographs
//!
//! A pure Rust barcode reading library with no image or vision
//! dependencies: the raster container is decoded by a hand-rolled
//! combinator parser, and a single scanline is enough to recover all
//! thirteen digits even under blur, bad contrast and inexact bar widths.
//!
//! The pipeline: parse the P6 container, reduce the center row to
//! luminance, binarize against the row's own brightness range, run-length
//! encode, score each 4-run group against the digit tables, then let the
//! checksum constraint pick the right assignment out of the ambiguity.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Digit decoding (reference tables, matching, checksum solving)
pub mod decoder;
/// Synthetic barcode rendering for fixtures and benchmarks
pub mod encoder;
/// Error types
pub mod error;
/// Combinator parser core
pub mod parser;
/// Decode orchestration (row selection, offset scan)
pub mod pipeline;
/// Raster container decoding
pub mod raster;
/// Scanline signal extraction
pub mod signal;

pub use error::{DecodeError, ParseError};
pub use pipeline::{Scanner, decode_barcode, decode_pixmap_rows, decode_row};
pub use raster::{Pixmap, parse_pixmap};
pub use signal::{Bit, Run};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{RenderOptions, render_pixmap};

    #[test]
    fn test_decode_clean_render() {
        let payload = [5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5];
        let buf = render_pixmap(&payload, &RenderOptions::default());
        let digits = decode_barcode(&buf).unwrap();
        assert_eq!(&digits[..12], &payload);
        assert_eq!(digits[12], 7);
    }

    #[test]
    fn test_decode_garbage_is_error_not_panic() {
        assert!(decode_barcode(b"not a raster").is_err());
        assert!(decode_barcode(b"").is_err());
    }

    #[test]
    fn test_scanner_default_matches_free_function() {
        let buf = render_pixmap(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7], &RenderOptions::default());
        assert_eq!(Scanner::new().decode(&buf), decode_barcode(&buf));
    }
}
