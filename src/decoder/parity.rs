//! Encoding-variant tagging for digit candidates

use std::cmp::Ordering;

/// A value tagged with the reference table variant that produced it.
///
/// `Odd`/`Even` mark the two left-half encodings; `None` marks right-half
/// candidates, which have a single encoding. Comparison helpers project the
/// payload out so ordering ignores the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity<T> {
    /// Matched against the odd-parity left table
    Odd(T),
    /// Matched against the even-parity left table
    Even(T),
    /// Matched against the right table (no parity variant)
    None(T),
}

impl<T> Parity<T> {
    /// The wrapped payload
    pub fn value(&self) -> &T {
        match self {
            Parity::Odd(v) | Parity::Even(v) | Parity::None(v) => v,
        }
    }

    /// Unwrap, discarding the tag
    pub fn into_value(self) -> T {
        match self {
            Parity::Odd(v) | Parity::Even(v) | Parity::None(v) => v,
        }
    }

    /// True for the even-parity variant
    pub fn is_even(&self) -> bool {
        matches!(self, Parity::Even(_))
    }

    /// Transform the payload, keeping the tag
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parity<U> {
        match self {
            Parity::Odd(v) => Parity::Odd(f(v)),
            Parity::Even(v) => Parity::Even(f(v)),
            Parity::None(v) => Parity::None(f(v)),
        }
    }

    /// Compare two tagged values by a key of the payload, ignoring tags
    pub fn cmp_by_key<K: PartialOrd>(a: &Self, b: &Self, key: impl Fn(&T) -> K) -> Ordering {
        key(a.value())
            .partial_cmp(&key(b.value()))
            .unwrap_or(Ordering::Equal)
    }
}
