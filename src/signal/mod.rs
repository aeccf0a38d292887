//! Scanline signal extraction
//!
//! One pixmap row in, a run-length-encoded bar/space sequence out:
//! luminance reduction, adaptive thresholding against the row's own
//! brightness range, then maximal-run encoding. Only the selected row is
//! ever materialized, so a decode attempt costs O(width) memory.

/// RGB to luminance reduction
pub mod luminance;
/// Maximal-run encoding of a bit row
pub mod runlength;
/// Adaptive binarization
pub mod threshold;

pub use luminance::row_luminance;
pub use runlength::{Run, run_length_encode};
pub use threshold::{Bit, THRESHOLD, threshold_row};

use crate::raster::Pixmap;

/// Extract one row of the pixmap as a run-length sequence.
pub fn extract_row(pixmap: &Pixmap, row: usize) -> Vec<Run> {
    let luma = row_luminance(pixmap, row);
    let bits = threshold_row(&luma);
    run_length_encode(&bits)
}
