//! Identity, symmetry, ordering and triangle laws.

use super::common::{ascii_word, byte_word, small_alphabet_word};
use fuzzrank::{
    damerau_levenshtein, dice_sorensen, frequency_distance, frequency_distance_trimmed, jaccard,
    jaro, lcs_length, levenshtein, osa_distance, overlap_coefficient, Grams, Metric,
};
use proptest::prelude::*;

/// One single-character edit of `word`: substitution, insertion, deletion or
/// adjacent swap. Edits that need more characters than `word` has fall back to
/// an insertion.
fn single_edit(word: &str, kind: u8, at: usize, ch: u8) -> String {
    let mut bytes = word.as_bytes().to_vec();
    let len = bytes.len();
    match kind {
        0 if len > 0 => bytes[at % len] = ch,
        2 if len > 0 => {
            bytes.remove(at % len);
        }
        3 if len > 1 => {
            let i = at % (len - 1);
            bytes.swap(i, i + 1);
        }
        _ => bytes.insert(at % (len + 1), ch),
    }
    String::from_utf8(bytes).unwrap()
}

proptest! {
    #[test]
    fn prop_identity(x in byte_word()) {
        prop_assert_eq!(levenshtein(&x, &x), 0);
        prop_assert_eq!(osa_distance(&x, &x), 0);
        prop_assert_eq!(damerau_levenshtein(&x, &x), 0);
        prop_assert_eq!(lcs_length(&x, &x), x.len());
        prop_assert_eq!(frequency_distance(&x, &x), 0.0);
        if !x.is_empty() {
            prop_assert_eq!(jaro(&x, &x), 1.0);
        }
    }

    #[test]
    fn prop_symmetry(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        prop_assert_eq!(osa_distance(&a, &b), osa_distance(&b, &a));
        prop_assert_eq!(damerau_levenshtein(&a, &b), damerau_levenshtein(&b, &a));
        prop_assert_eq!(lcs_length(&a, &b), lcs_length(&b, &a));
        prop_assert_eq!(jaro(&a, &b), jaro(&b, &a));
        prop_assert_eq!(frequency_distance(&a, &b), frequency_distance(&b, &a));
        if !a.is_empty() || !b.is_empty() {
            let grams = Grams::Character;
            prop_assert_eq!(dice_sorensen(&a, &b, grams), dice_sorensen(&b, &a, grams));
            prop_assert_eq!(jaccard(&a, &b, grams), jaccard(&b, &a, grams));
        }
        if !a.is_empty() && !b.is_empty() {
            prop_assert_eq!(
                overlap_coefficient(&a, &b, Grams::Character),
                overlap_coefficient(&b, &a, Grams::Character)
            );
        }
    }

    /// OSA restricts Damerau-Levenshtein, which restricts nothing Levenshtein allows.
    #[test]
    fn prop_distance_ordering(a in small_alphabet_word(), b in small_alphabet_word()) {
        let dl = damerau_levenshtein(&a, &b);
        let osa = osa_distance(&a, &b);
        let lev = levenshtein(&a, &b);
        prop_assert!(dl <= osa, "dl {} > osa {} for {:?} {:?}", dl, osa, a, b);
        prop_assert!(osa <= lev, "osa {} > lev {} for {:?} {:?}", osa, lev, a, b);
    }

    #[test]
    fn prop_distance_bounds(a in byte_word(), b in byte_word()) {
        let lower = a.len().abs_diff(b.len());
        let upper = a.len().max(b.len());
        for d in [levenshtein(&a, &b), osa_distance(&a, &b), damerau_levenshtein(&a, &b)] {
            prop_assert!(lower <= d && d <= upper);
        }
        prop_assert!(lcs_length(&a, &b) <= a.len().min(b.len()));
    }

    #[test]
    fn prop_triangle_inequality(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
        c in small_alphabet_word(),
    ) {
        prop_assert!(levenshtein(&a, &c) <= levenshtein(&a, &b) + levenshtein(&b, &c));
        prop_assert!(
            damerau_levenshtein(&a, &c) <= damerau_levenshtein(&a, &b) + damerau_levenshtein(&b, &c)
        );
    }

    /// Any single edit that changes the word moves it away from the original.
    #[test]
    fn prop_frequency_distance_grows_under_single_edit(
        word in small_alphabet_word(),
        kind in 0u8..4,
        at in 0usize..16,
        ch in prop::sample::select(b"abcde".to_vec()),
    ) {
        let edited = single_edit(&word, kind, at, ch);
        let d = frequency_distance(&word, &edited);
        prop_assert_eq!(d, frequency_distance(&edited, &word));
        if edited == word {
            prop_assert_eq!(d, 0.0);
        } else {
            prop_assert!(d > 0.0, "{:?} -> {:?} scored 0", word, edited);
        }
    }

    #[test]
    fn prop_unit_interval(a in ascii_word(), b in ascii_word()) {
        let checks = [
            ("jaro", jaro(&a, &b)),
            ("frequency", frequency_distance(&a, &b)),
            ("frequency_trimmed", frequency_distance_trimmed(&a, &b)),
        ];
        for (name, value) in checks {
            prop_assert!((0.0..=1.0).contains(&value), "{} = {}", name, value);
        }
    }

    /// Every named metric gives a finite score, degenerate inputs included.
    #[test]
    fn prop_named_metrics_total(a in small_alphabet_word(), b in small_alphabet_word()) {
        for name in Metric::NAMES {
            let metric: Metric = name.parse().unwrap();
            let score = metric.score(&a, &b);
            prop_assert!(score.is_finite(), "{}({:?}, {:?}) = {}", name, a, b, score);
        }
    }
}

#[test]
fn test_frequency_distance_single_edits() {
    let word = "kitten";
    for edited in ["sitten", "kittn", "kitteen", "iktten", "kitetn"] {
        let d = frequency_distance(word, edited);
        assert!(d > 0.0, "{} -> {} scored 0", word, edited);
        assert_eq!(d, frequency_distance(edited, word));
    }
}

/// OSA forbids editing a substring twice, so it breaks the triangle inequality.
#[test]
fn test_osa_is_not_a_metric() {
    assert_eq!(osa_distance("ca", "abc"), 3);
    assert_eq!(osa_distance("ca", "ac"), 1);
    assert_eq!(osa_distance("ac", "abc"), 1);
    assert_eq!(damerau_levenshtein("ca", "abc"), 2);
}
