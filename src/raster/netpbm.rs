//! P6 raster container decoding
//!
//! Grammar: `P6` tag, whitespace, decimal width, whitespace, decimal height,
//! whitespace, decimal max channel value (must be 255), exactly one
//! whitespace byte, then `width * height * 3` raw RGB bytes. Header comments
//! are not part of the accepted grammar.

use crate::error::ParseError;
use crate::parser::combinators::{byte, fixed_bytes, is_whitespace, literal, natural_number, skip_whitespace};
use crate::parser::cursor::ByteCursor;
use crate::raster::pixmap::Pixmap;

/// Decode a P6 buffer into a [`Pixmap`].
///
/// Fails with an offset-carrying error on a bad tag, unparsable numeric
/// field, unsupported channel depth, or truncated pixel payload.
pub fn parse_pixmap(input: &[u8]) -> Result<Pixmap, ParseError> {
    let cur = ByteCursor::new(input);
    let ((), cur) = literal(cur, b"P6")?;
    let ((), cur) = skip_whitespace(cur)?;
    let (width, cur) = natural_number(cur)?;
    let ((), cur) = skip_whitespace(cur)?;
    let (height, cur) = natural_number(cur)?;
    let ((), cur) = skip_whitespace(cur)?;

    let max_value_offset = cur.offset();
    let (max_value, cur) = natural_number(cur)?;
    if max_value != 255 {
        // 16-bit channel rasters are not supported
        return Err(ParseError::new(
            max_value_offset,
            format!("unsupported max channel value {max_value} (expected 255)"),
        ));
    }

    let delim_offset = cur.offset();
    let (delim, cur) = byte(cur)?;
    if !is_whitespace(delim) {
        return Err(ParseError::new(
            delim_offset,
            "expected single whitespace byte before pixel payload",
        ));
    }

    let payload_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| ParseError::new(delim_offset, "image dimensions out of range"))?;
    let (raw, _cur) = fixed_bytes(cur, payload_len)?;

    Ok(Pixmap::from_raw(width as usize, height as usize, raw.to_vec()))
}
