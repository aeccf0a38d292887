//! Checksum-constrained digit assignment search
//!
//! Twelve candidate lists with up to six guesses each span millions of
//! assignments; testing them all is infeasible. The search instead keys
//! partial assignments by their weighted checksum residue, which can only
//! take ten values, so each position folds in O(candidates) work and the
//! map never holds more than ten live sequences.
//!
//! When two partial assignments land on the same residue the one with the
//! lower accumulated match score is kept, so a perfectly read symbol can
//! never be displaced by a coincidentally consistent misread.

use crate::decoder::checksum::weighted_sum;
use crate::decoder::matcher::CandidateDigit;
use crate::decoder::parity::Parity;
use crate::decoder::tables::first_digit_for_pattern;

/// A partial assignment: accumulated match score plus the digits chosen so
/// far, each with its parity evidence.
#[derive(Debug, Clone)]
struct PartialRead {
    score: f32,
    digits: Vec<Parity<u8>>,
}

/// Accumulator of partial assignments, keyed by checksum residue 0..9.
#[derive(Debug, Clone, Default)]
pub struct SolutionMap {
    slots: [Option<PartialRead>; 10],
}

impl SolutionMap {
    fn new() -> Self {
        Self::default()
    }

    /// The fold seed: residue zero reached by the empty sequence
    fn seeded() -> Self {
        let mut map = Self::new();
        map.slots[0] = Some(PartialRead {
            score: 0.0,
            digits: Vec::new(),
        });
        map
    }

    /// Keep the closer-matching sequence on collision
    fn offer(&mut self, residue: usize, read: PartialRead) {
        match &self.slots[residue] {
            Some(existing) if existing.score <= read.score => {}
            _ => self.slots[residue] = Some(read),
        }
    }

    fn entries(&self) -> impl Iterator<Item = (usize, &PartialRead)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(residue, read)| read.as_ref().map(|r| (residue, r)))
    }
}

/// Fold one position's candidates into the accumulator.
///
/// The weight feeds the residue key only; sequences store plain digits.
fn fold_position(
    old: &SolutionMap,
    candidates: &[Parity<CandidateDigit>],
    weight: u32,
) -> SolutionMap {
    let mut next = SolutionMap::new();
    for (residue, read) in old.entries() {
        for candidate in candidates {
            let guess = *candidate.value();
            let key = ((residue as u32 + weight * guess.digit as u32) % 10) as usize;

            let mut digits = read.digits.clone();
            digits.push(candidate.map(|c| c.digit));
            next.offer(
                key,
                PartialRead {
                    score: read.score + guess.score,
                    digits,
                },
            );
        }
    }
    next
}

/// Parity pattern of the six left digits of a sequence, MSB-first
fn parity_pattern(digits: &[Parity<u8>]) -> u8 {
    digits[..6]
        .iter()
        .enumerate()
        .map(|(i, p)| (p.is_even() as u8) << (5 - i))
        .sum()
}

/// Search the candidate lists for a checksum-consistent 13-digit answer.
///
/// `groups` is the matcher's output: six left lists (parity-tagged), five
/// right body lists, and the printed check digit's list last. Returns
/// `None` when any list is empty or no check-digit candidate closes the
/// checksum.
pub fn solve(groups: &[Vec<Parity<CandidateDigit>>]) -> Option<[u8; 13]> {
    if groups.len() != 12 || groups.iter().any(|g| g.is_empty()) {
        return None;
    }

    // Fold the eleven body positions (digits 2..=12). Digit 2 sits at an
    // odd 0-based position of the full number, so the fold starts at
    // weight 3 and alternates.
    let mut map = SolutionMap::seeded();
    for (position, candidates) in groups[..11].iter().enumerate() {
        let weight = if position % 2 == 0 { 3 } else { 1 };
        map = fold_position(&map, candidates, weight);
    }

    // Re-key each surviving sequence by the check digit it requires. The
    // leading digit comes from the parity evidence; sequences whose tags
    // form no valid pattern cannot name one and are dropped. Collisions
    // again keep the closer match.
    let mut by_check: [Option<(f32, [u8; 12])>; 10] = [None; 10];
    for (residue, read) in map.entries() {
        let Some(first) = first_digit_for_pattern(parity_pattern(&read.digits)) else {
            continue;
        };
        let needed = ((10 - (residue as u32 + first as u32) % 10) % 10) as usize;

        let mut digits = [0u8; 12];
        digits[0] = first;
        for (i, p) in read.digits.iter().enumerate() {
            digits[i + 1] = *p.value();
        }
        match by_check[needed] {
            Some((score, _)) if score <= read.score => {}
            _ => by_check[needed] = Some((read.score, digits)),
        }
    }

    // The check-digit list is already sorted ascending by match score, so
    // the first hit is the tie-break winner.
    for candidate in &groups[11] {
        let check = candidate.value().digit;
        if let Some((_, body)) = by_check[check as usize] {
            let mut full = [0u8; 13];
            full[..12].copy_from_slice(&body);
            full[12] = check;
            debug_assert_eq!((weighted_sum(&full[..12]) + check as u32) % 10, 0);
            return Some(full);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::checksum::{check_digit, is_consistent};
    use crate::decoder::tables::parity_pattern_for_digit;

    /// Candidate lists that read out `digits` exactly, one guess per
    /// position, with the left tags matching the leading digit's pattern.
    fn exact_groups(digits: &[u8; 13]) -> Vec<Vec<Parity<CandidateDigit>>> {
        let pattern = parity_pattern_for_digit(digits[0]);
        let mut groups = Vec::new();
        for i in 0..6 {
            let guess = CandidateDigit { score: 0.0, digit: digits[1 + i] };
            groups.push(vec![if pattern & (1 << (5 - i)) != 0 {
                Parity::Even(guess)
            } else {
                Parity::Odd(guess)
            }]);
        }
        for i in 0..6 {
            let guess = CandidateDigit { score: 0.0, digit: digits[7 + i] };
            groups.push(vec![Parity::None(guess)]);
        }
        groups
    }

    fn full_number(payload: &[u8; 12]) -> [u8; 13] {
        let mut full = [0u8; 13];
        full[..12].copy_from_slice(payload);
        full[12] = check_digit(payload);
        full
    }

    #[test]
    fn test_solve_unambiguous() {
        let full = full_number(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7]);
        assert_eq!(solve(&exact_groups(&full)), Some(full));
    }

    #[test]
    fn test_solve_leading_zero() {
        // UPC-A: all-odd left parity
        let full = full_number(&[0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5, 2]);
        assert_eq!(solve(&exact_groups(&full)), Some(full));
    }

    #[test]
    fn test_checksum_recovers_from_wrong_best_guess() {
        let full = full_number(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7]);
        let mut groups = exact_groups(&full);

        // A closer-scoring wrong guess at the third left position: only
        // the true digit can close the checksum, so it must still win.
        let truth = groups[2][0];
        let wrong = truth.map(|c| CandidateDigit {
            score: 0.01,
            digit: (c.digit + 1) % 10,
        });
        groups[2] = vec![wrong, truth.map(|c| CandidateDigit { score: 0.2, ..c })];

        let solved = solve(&groups).unwrap();
        assert_eq!(solved, full);
        assert!(is_consistent(&solved));
    }

    #[test]
    fn test_lower_total_score_wins_residue_collision() {
        // The same digit offered twice at one position lands both reads on
        // one residue; the cheaper read must survive the collision.
        let full = full_number(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7]);
        let mut groups = exact_groups(&full);

        let truth = groups[10][0];
        groups[10] = vec![
            truth.map(|c| CandidateDigit { score: 0.5, ..c }),
            truth.map(|c| CandidateDigit { score: 0.1, ..c }),
        ];

        let solved = solve(&groups).unwrap();
        assert_eq!(solved, full);
    }

    #[test]
    fn test_empty_list_fails() {
        let full = full_number(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7]);
        let mut groups = exact_groups(&full);
        groups[4].clear();
        assert_eq!(solve(&groups), None);
    }

    #[test]
    fn test_wrong_check_digit_fails() {
        let full = full_number(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7]);
        let mut groups = exact_groups(&full);
        let bad = (full[12] + 1) % 10;
        groups[11] = vec![Parity::None(CandidateDigit { score: 0.0, digit: bad })];
        assert_eq!(solve(&groups), None);
    }

    #[test]
    fn test_invalid_parity_pattern_dropped() {
        let full = full_number(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7]);
        let mut groups = exact_groups(&full);
        // Flip one left tag so the six-way pattern matches no table row
        groups[0] = vec![Parity::Even(*groups[0][0].value())];
        assert_eq!(solve(&groups), None);
    }
}
