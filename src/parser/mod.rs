//! Combinator parser core for the raster container format
//!
//! Parse progress is an explicit immutable value: every primitive takes a
//! [`ByteCursor`] and returns a fresh one alongside the parsed value, so
//! multi-step decodes are chained with `?`/`and_then` and short-circuit on
//! the first failure without any shared parse position.

/// Parser primitives (`byte`, `fixed_bytes`, `literal`, ...)
pub mod combinators;
/// Immutable buffer view plus scanning offset
pub mod cursor;

pub use combinators::{ParseResult, byte, fixed_bytes, literal, natural_number, skip_whitespace};
pub use cursor::ByteCursor;
