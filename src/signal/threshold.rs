//! Adaptive row binarization
//!
//! The pivot sits at a fixed fraction of the row's own luminance range, so
//! the same barcode reads identically off a dim sensor and an overexposed
//! one. A fixed global threshold fails on most real photographs.

/// One thresholded sample: `Zero` is dark (bar), `One` is light (space)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bit {
    /// Dark sample (bar ink)
    Zero,
    /// Light sample (background)
    One,
}

/// Fraction of the luminance range at which the dark/light pivot sits
pub const THRESHOLD: f32 = 0.4;

/// Binarize a luminance row against its own min/max range.
pub fn threshold_row(luma: &[u8]) -> Vec<Bit> {
    threshold_row_with(luma, THRESHOLD)
}

/// Binarize with an explicit pivot fraction.
pub fn threshold_row_with(luma: &[u8], threshold: f32) -> Vec<Bit> {
    let Some((&min, &max)) = luma
        .iter()
        .min()
        .zip(luma.iter().max())
    else {
        return Vec::new();
    };

    // A flat row has no range; nothing falls below the pivot, so it comes
    // out all-light and is rejected later by the leading-bar guard.
    let pivot = min as f32 + (max - min) as f32 * threshold;
    luma.iter()
        .map(|&v| if (v as f32) < pivot { Bit::Zero } else { Bit::One })
        .collect()
}
