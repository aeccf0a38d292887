//! Decode orchestration
//!
//! Row selection and the lazy offset scan sit here, above the pure stage
//! modules. A single decode attempt is sequential; the multi-row entry
//! fans attempts out with rayon, which is safe because every stage is a
//! pure function over the shared immutable pixmap.

use rayon::prelude::*;

use crate::decoder::{candidate_digits, solve};
use crate::error::DecodeError;
use crate::raster::{Pixmap, parse_pixmap};
use crate::signal::{Run, extract_row};

/// Decode an EAN-13/UPC-A barcode from a raw P6 buffer.
///
/// Scans the vertical center row at every horizontal run offset, stopping
/// at the first checksum-consistent hit.
pub fn decode_barcode(input: &[u8]) -> Result<[u8; 13], DecodeError> {
    let pixmap = parse_pixmap(input)?;
    decode_pixmap(&pixmap)
}

/// Decode from an already-parsed pixmap (center row)
pub fn decode_pixmap(pixmap: &Pixmap) -> Result<[u8; 13], DecodeError> {
    if pixmap.width() == 0 || pixmap.height() == 0 {
        return Err(DecodeError::NotFound);
    }
    decode_row(pixmap, pixmap.height() / 2).ok_or(DecodeError::NotFound)
}

/// Attempt one row: extract the signal and scan it
pub fn decode_row(pixmap: &Pixmap, row: usize) -> Option<[u8; 13]> {
    scan_runs(&extract_row(pixmap, row))
}

/// Try a decode at every run offset of a signal, first success wins.
///
/// Offsets advance one run at a time; each tail is re-checked by the
/// matcher's window guard, so junk runs ahead of the leading guard bar
/// cost one cheap rejection each.
pub fn scan_runs(runs: &[Run]) -> Option<[u8; 13]> {
    (0..runs.len()).find_map(|offset| {
        let groups = candidate_digits(&runs[offset..])?;
        solve(&groups)
    })
}

/// Try several rows in parallel; any first success wins.
///
/// This is deliberately not multi-row voting: rows are independent decode
/// attempts and the first checksum-consistent answer is returned.
pub fn decode_pixmap_rows(pixmap: &Pixmap, rows: &[usize]) -> Option<[u8; 13]> {
    rows.par_iter()
        .filter(|&&row| row < pixmap.height())
        .find_map_any(|&row| decode_row(pixmap, row))
}

/// Configurable scanner, for callers that want more than the center row.
pub struct Scanner {
    row_spread: usize,
}

impl Scanner {
    /// Scanner that reads only the center row
    pub fn new() -> Self {
        Self { row_spread: 0 }
    }

    /// Scanner that also tries `row_spread` evenly spaced rows on each
    /// side of the center, in parallel
    pub fn with_row_spread(row_spread: usize) -> Self {
        Self { row_spread }
    }

    /// Decode a raw P6 buffer
    pub fn decode(&self, input: &[u8]) -> Result<[u8; 13], DecodeError> {
        let pixmap = parse_pixmap(input)?;
        if pixmap.width() == 0 || pixmap.height() == 0 {
            return Err(DecodeError::NotFound);
        }
        if self.row_spread == 0 {
            return decode_pixmap(&pixmap);
        }
        let rows = self.candidate_rows(pixmap.height());
        decode_pixmap_rows(&pixmap, &rows).ok_or(DecodeError::NotFound)
    }

    fn candidate_rows(&self, height: usize) -> Vec<usize> {
        let center = height / 2;
        let step = (height / (2 * (self.row_spread + 1))).max(1);

        let mut rows = vec![center];
        for k in 1..=self.row_spread {
            if let Some(above) = center.checked_sub(k * step) {
                rows.push(above);
            }
            let below = center + k * step;
            if below < height {
                rows.push(below);
            }
        }
        rows.sort_unstable();
        rows.dedup();
        rows
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
