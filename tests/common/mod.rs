//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;

// Re-export the full-matrix oracles from fuzzrank::testing
pub use fuzzrank::testing::{naive_lcs, naive_levenshtein, naive_osa};

// ============================================================================
// FIXTURES
// ============================================================================

/// Candidates from the README sort example, matched against [`README_TARGET`].
pub const README_CANDIDATES: [&str; 5] = ["aple", "application", "orange", "banana", "appel"];

pub const README_TARGET: &str = "apple";

/// Tolerance for table-driven float comparisons.
pub const EPSILON: f64 = 1e-13;

pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "{}: got {}, expected {}",
        context,
        actual,
        expected
    );
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short ASCII words over a small alphabet, so inputs share characters often.
pub fn small_alphabet_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,10}").unwrap()
}

/// Printable ASCII words of moderate length.
pub fn ascii_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{0,16}").unwrap()
}

/// Arbitrary bytes, including non-UTF-8 sequences.
pub fn byte_word() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..24)
}

/// A candidate list for pipeline tests.
pub fn candidate_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(small_alphabet_word(), 0..20)
}
