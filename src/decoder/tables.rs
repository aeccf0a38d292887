//! EAN-13 reference tables
//!
//! Each digit occupies seven modules split into four alternating runs. The
//! tables below carry the run widths per digit; matching normalizes both
//! sides to unit sum, so only the relative widths matter.
//!
//! Left-half digits come in two bit-complementary encodings. Which of the
//! two each of the six left positions uses is itself a signal: the six-way
//! parity pattern encodes the thirteenth (leading) digit, which is never
//! printed as bars at all.

/// Runs per digit group
pub const DIGIT_RUNS: usize = 4;

/// Modules per digit group (run widths always sum to this)
pub const DIGIT_MODULES: u32 = 7;

/// Left-half digit run widths, odd parity (space, bar, space, bar)
pub const LEFT_ODD: [[u8; 4]; 10] = [
    [3, 2, 1, 1], // 0
    [2, 2, 2, 1], // 1
    [2, 1, 2, 2], // 2
    [1, 4, 1, 1], // 3
    [1, 1, 3, 2], // 4
    [1, 2, 3, 1], // 5
    [1, 1, 1, 4], // 6
    [1, 3, 1, 2], // 7
    [1, 2, 1, 3], // 8
    [3, 1, 1, 2], // 9
];

/// Left-half digit run widths, even parity (each row is LEFT_ODD reversed)
pub const LEFT_EVEN: [[u8; 4]; 10] = [
    [1, 1, 2, 3], // 0
    [1, 2, 2, 2], // 1
    [2, 2, 1, 2], // 2
    [1, 1, 4, 1], // 3
    [2, 3, 1, 1], // 4
    [1, 3, 2, 1], // 5
    [4, 1, 1, 1], // 6
    [2, 1, 3, 1], // 7
    [3, 1, 2, 1], // 8
    [2, 1, 1, 3], // 9
];

/// Right-half digit run widths (bar, space, bar, space).
///
/// Right patterns are the bit complement of the odd-parity left patterns,
/// which flips colors but keeps every boundary, so the widths coincide
/// with LEFT_ODD. Kept as its own table; the starting color differs.
pub const RIGHT: [[u8; 4]; 10] = LEFT_ODD;

/// Parity pattern of the six left digits per leading digit, MSB-first.
///
/// Bit 5 covers the first left position; a set bit means even parity.
/// A leading 0 (the UPC-A case) uses odd parity throughout.
pub const PARITY_PATTERNS: [u8; 10] = [
    0b000000, // 0
    0b001011, // 1
    0b001101, // 2
    0b001110, // 3
    0b010011, // 4
    0b011001, // 5
    0b011100, // 6
    0b010101, // 7
    0b010110, // 8
    0b011010, // 9
];

/// Leading digit for an observed six-bit parity pattern, if it is one of
/// the ten valid patterns.
pub fn first_digit_for_pattern(pattern: u8) -> Option<u8> {
    PARITY_PATTERNS
        .iter()
        .position(|&p| p == pattern)
        .map(|d| d as u8)
}

/// Parity pattern a given leading digit imposes on the left half
pub fn parity_pattern_for_digit(digit: u8) -> u8 {
    PARITY_PATTERNS[digit as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rows_span_seven_modules() {
        for table in [&LEFT_ODD, &LEFT_EVEN, &RIGHT] {
            for row in table.iter() {
                assert_eq!(row.iter().map(|&w| w as u32).sum::<u32>(), DIGIT_MODULES);
            }
        }
    }

    #[test]
    fn test_even_is_reversed_odd() {
        for digit in 0..10 {
            let mut reversed = LEFT_ODD[digit];
            reversed.reverse();
            assert_eq!(LEFT_EVEN[digit], reversed);
        }
    }

    #[test]
    fn test_parity_patterns_unique() {
        for (i, &a) in PARITY_PATTERNS.iter().enumerate() {
            for &b in &PARITY_PATTERNS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_first_digit_lookup() {
        assert_eq!(first_digit_for_pattern(0b000000), Some(0));
        assert_eq!(first_digit_for_pattern(0b010101), Some(7));
        assert_eq!(first_digit_for_pattern(0b111111), None);
    }
}
