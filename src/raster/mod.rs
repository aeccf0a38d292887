//! Raster container decoding
//!
//! Turns a raw P6 byte buffer into a typed RGB pixel grid using the parser
//! core. No external image libraries are involved anywhere in the crate.

/// P6 container header and payload parsing
pub mod netpbm;
/// Typed RGB pixel grid
pub mod pixmap;

pub use netpbm::parse_pixmap;
pub use pixmap::Pixmap;
