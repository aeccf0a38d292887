//! Parser primitives over [`ByteCursor`]
//!
//! Each primitive returns `Ok((value, next_cursor))` or an offset-carrying
//! [`ParseError`]. Chaining is `Result::and_then` (or `?` with tuple
//! destructuring) and value conversion is `Result::map` over the value half
//! of the tuple; once a step fails, no later step runs.

use crate::error::ParseError;
use crate::parser::cursor::ByteCursor;

/// Result of a parse step: the parsed value and the rest of the input,
/// or an error pinned to a byte offset.
pub type ParseResult<'a, T> = Result<(T, ByteCursor<'a>), ParseError>;

/// ASCII whitespace as the container format defines it
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Consume a single byte
pub fn byte(cur: ByteCursor<'_>) -> ParseResult<'_, u8> {
    match cur.peek() {
        Some(b) => Ok((b, cur.advance(1))),
        None => Err(ParseError::new(cur.offset(), "unexpected end of input")),
    }
}

/// Consume exactly `count` bytes
pub fn fixed_bytes(cur: ByteCursor<'_>, count: usize) -> ParseResult<'_, &[u8]> {
    let rest = cur.remaining();
    if rest.len() < count {
        return Err(ParseError::new(
            cur.offset(),
            format!("truncated input: needed {count} bytes, found {}", rest.len()),
        ));
    }
    Ok((&rest[..count], cur.advance(count)))
}

/// Match and discard an exact byte sequence
pub fn literal<'a>(cur: ByteCursor<'a>, tag: &[u8]) -> ParseResult<'a, ()> {
    if cur.remaining().starts_with(tag) {
        Ok(((), cur.advance(tag.len())))
    } else {
        Err(ParseError::new(
            cur.offset(),
            format!("expected literal {:?}", String::from_utf8_lossy(tag)),
        ))
    }
}

/// Parse one or more ASCII decimal digits into a `u32`.
///
/// Overflow is a parse error, not a wrap.
pub fn natural_number(cur: ByteCursor<'_>) -> ParseResult<'_, u32> {
    let start = cur.offset();
    let mut value: u32 = 0;
    let mut digits = 0usize;
    let mut cur = cur;

    while let Some(b @ b'0'..=b'9') = cur.peek() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add((b - b'0') as u32))
            .ok_or_else(|| ParseError::new(start, "decimal number out of range"))?;
        digits += 1;
        cur = cur.advance(1);
    }

    if digits == 0 {
        return Err(ParseError::new(start, "expected decimal number"));
    }
    Ok((value, cur))
}

/// Skip a run of insignificant whitespace (possibly empty). Never fails.
pub fn skip_whitespace(cur: ByteCursor<'_>) -> ParseResult<'_, ()> {
    let mut cur = cur;
    while cur.peek().is_some_and(is_whitespace) {
        cur = cur.advance(1);
    }
    Ok(((), cur))
}
