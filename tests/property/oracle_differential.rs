//! Differential tests against strsim and the full-matrix oracles.
//!
//! strsim works on chars, so its inputs stay ASCII where one char is one byte.

use super::common::{
    ascii_word, byte_word, naive_lcs, naive_levenshtein, naive_osa, small_alphabet_word,
};
use fuzzrank::{damerau_levenshtein, jaro, lcs_length, levenshtein, osa_distance};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_levenshtein_matches_strsim(a in ascii_word(), b in ascii_word()) {
        prop_assert_eq!(levenshtein(&a, &b), strsim::levenshtein(&a, &b));
    }

    #[test]
    fn prop_osa_matches_strsim(a in ascii_word(), b in ascii_word()) {
        prop_assert_eq!(osa_distance(&a, &b), strsim::osa_distance(&a, &b));
    }

    #[test]
    fn prop_damerau_levenshtein_matches_strsim(a in ascii_word(), b in ascii_word()) {
        prop_assert_eq!(damerau_levenshtein(&a, &b), strsim::damerau_levenshtein(&a, &b));
    }

    /// Greedy matching scans one side against the other; accept either scan order.
    #[test]
    fn prop_jaro_matches_strsim(a in small_alphabet_word(), b in small_alphabet_word()) {
        let ours = jaro(&a, &b);
        let forward = strsim::jaro(&a, &b);
        let backward = strsim::jaro(&b, &a);
        prop_assert!(
            (ours - forward).abs() < 1e-12 || (ours - backward).abs() < 1e-12,
            "jaro({:?}, {:?}) = {}, strsim gives {} / {}",
            a, b, ours, forward, backward
        );
    }

    #[test]
    fn prop_levenshtein_matches_naive(a in byte_word(), b in byte_word()) {
        prop_assert_eq!(levenshtein(&a, &b), naive_levenshtein(&a, &b));
    }

    /// Few letters, so transpositions and long shared runs come up often.
    #[test]
    fn prop_levenshtein_matches_naive_small_alphabet(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
    ) {
        prop_assert_eq!(levenshtein(&a, &b), naive_levenshtein(a.as_bytes(), b.as_bytes()));
    }

    #[test]
    fn prop_osa_matches_naive(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(osa_distance(&a, &b), naive_osa(a.as_bytes(), b.as_bytes()));
    }

    #[test]
    fn prop_lcs_matches_naive(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(lcs_length(&a, &b), naive_lcs(a.as_bytes(), b.as_bytes()));
    }
}
