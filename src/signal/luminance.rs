//! RGB to luminance reduction
//! Y = 0.30*R + 0.59*G + 0.11*B, rounded to nearest
//! Computed in integer arithmetic: Y = (30*R + 59*G + 11*B + 50) / 100

use crate::raster::Pixmap;

/// Luminance of a single RGB triple
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((30 * r as u32 + 59 * g as u32 + 11 * b as u32 + 50) / 100) as u8
}

/// Reduce one pixmap row to luminance bytes
pub fn row_luminance(pixmap: &Pixmap, row: usize) -> Vec<u8> {
    pixmap
        .row(row)
        .chunks_exact(3)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect()
}
