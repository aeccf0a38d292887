//! Error types for raster parsing and barcode decoding.

use thiserror::Error;

/// A parse failure at an exact byte offset of the input buffer.
///
/// Every parser primitive reports the offset at which it gave up, so a
/// malformed header is always attributable to a specific byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at byte offset {offset}")]
pub struct ParseError {
    /// Byte offset into the input buffer where parsing failed
    pub offset: usize,
    /// Human-readable description of what was expected
    pub message: String,
}

impl ParseError {
    /// Create a parse error at the given offset
    pub fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Caller-visible outcome of a failed decode.
///
/// The two arms are deliberately distinct: a malformed raster aborts
/// immediately and is never retried, while `NotFound` means the raster was
/// well-formed but no offset of the scanned row produced a
/// checksum-consistent digit assignment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input buffer is not a valid raster container
    #[error("malformed raster: {0}")]
    Malformed(#[from] ParseError),
    /// The raster parsed but no barcode could be read from it
    #[error("no barcode found")]
    NotFound,
}
