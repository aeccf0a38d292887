//! EAN-13 digit decoding
//!
//! This module turns a run-length signal into thirteen digits:
//! - Reference tables for the three digit encodings and the parity trick
//! - Approximate matching of 4-run groups against those tables
//! - The residue-keyed solver that picks a checksum-consistent assignment

/// Weighted mod-10 checksum helpers
pub mod checksum;
/// Group scoring against the reference tables
pub mod matcher;
/// Encoding-variant tag for candidates
pub mod parity;
/// Residue-keyed constraint search
pub mod solver;
/// Static EAN-13 encoding tables
pub mod tables;

pub use checksum::{check_digit, is_consistent};
pub use matcher::{CandidateDigit, MIN_RUN_COUNT, candidate_digits};
pub use parity::Parity;
pub use solver::solve;
