//! Approximate digit matching against the reference tables
//!
//! A candidate window is scored group by group: each aligned 4-run group is
//! normalized to unit sum and compared to every reference vector by L1
//! distance. The top three guesses per table survive: the true digit is
//! not always the closest under this crude metric, but it is almost always
//! in the top three, and the checksum solver sorts out the rest.

use crate::decoder::parity::Parity;
use crate::decoder::tables::{DIGIT_RUNS, LEFT_EVEN, LEFT_ODD, RIGHT};
use crate::signal::{Bit, Run};

/// A scored digit guess; lower score is a closer match
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateDigit {
    /// Sum of absolute differences against the reference vector
    pub score: f32,
    /// The guessed digit
    pub digit: u8,
}

/// Guesses carried forward per table
const TOP_GUESSES: usize = 3;

/// Minimum run count for a plausible window: 3 guard runs, 24 left-digit
/// runs, 5 center guard runs, 24 right-digit runs, 3 end guard runs.
pub const MIN_RUN_COUNT: usize = 59;

/// First run index of the left digit groups (after the leading guard)
const LEFT_START: usize = 3;

/// First run index of the right digit groups (after the center guard)
const RIGHT_START: usize = 32;

/// Normalize four run lengths to unit sum
fn scale_to_one(runs: &[u32; 4]) -> [f32; 4] {
    let total: u32 = runs.iter().sum();
    let total = total.max(1) as f32;
    [
        runs[0] as f32 / total,
        runs[1] as f32 / total,
        runs[2] as f32 / total,
        runs[3] as f32 / total,
    ]
}

/// Sum of absolute differences between two normalized vectors
fn distance(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum()
}

fn scaled_reference(widths: &[u8; 4]) -> [f32; 4] {
    scale_to_one(&[
        widths[0] as u32,
        widths[1] as u32,
        widths[2] as u32,
        widths[3] as u32,
    ])
}

/// Score a 4-run group against one reference table; the three closest
/// digits, ascending by distance.
pub fn best_scores(table: &[[u8; 4]; 10], group: &[u32; 4]) -> Vec<CandidateDigit> {
    let target = scale_to_one(group);
    let mut scores: Vec<CandidateDigit> = table
        .iter()
        .enumerate()
        .map(|(digit, widths)| CandidateDigit {
            score: distance(&scaled_reference(widths), &target),
            digit: digit as u8,
        })
        .collect();
    scores.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal));
    scores.truncate(TOP_GUESSES);
    scores
}

/// Candidates for a left-half group: matched against both parity tables,
/// merged and sorted by score (six guesses, tags preserved).
pub fn best_left(group: &[u32; 4]) -> Vec<Parity<CandidateDigit>> {
    let mut all: Vec<Parity<CandidateDigit>> = best_scores(&LEFT_ODD, group)
        .into_iter()
        .map(Parity::Odd)
        .chain(best_scores(&LEFT_EVEN, group).into_iter().map(Parity::Even))
        .collect();
    all.sort_by(|a, b| Parity::cmp_by_key(a, b, |c| c.score));
    all
}

/// Candidates for a right-half group: single table, top three
pub fn best_right(group: &[u32; 4]) -> Vec<Parity<CandidateDigit>> {
    best_scores(&RIGHT, group)
        .into_iter()
        .map(Parity::None)
        .collect()
}

/// Score every digit group of a candidate window.
///
/// Returns the twelve candidate lists (six left, six right; the last right
/// list covers the printed check digit), or `None` when the window cannot
/// hold a barcode: fewer than [`MIN_RUN_COUNT`] runs, or a leading run that
/// is not dark. Both guards run before any scoring is attempted.
pub fn candidate_digits(runs: &[Run]) -> Option<Vec<Vec<Parity<CandidateDigit>>>> {
    if runs.len() < MIN_RUN_COUNT {
        return None;
    }
    if runs[0].bit != Bit::Zero {
        return None;
    }

    let widths: Vec<u32> = runs[..MIN_RUN_COUNT].iter().map(|r| r.length).collect();
    let group_at = |start: usize| -> [u32; 4] {
        [
            widths[start],
            widths[start + 1],
            widths[start + 2],
            widths[start + 3],
        ]
    };

    let mut groups = Vec::with_capacity(12);
    for g in 0..6 {
        groups.push(best_left(&group_at(LEFT_START + g * DIGIT_RUNS)));
    }
    for g in 0..6 {
        groups.push(best_right(&group_at(RIGHT_START + g * DIGIT_RUNS)));
    }

    if groups.iter().any(|g| g.is_empty()) {
        return None;
    }
    Some(groups)
}
