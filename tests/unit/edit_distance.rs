//! Edit-distance engines against hand-checked tables.

use super::common::assert_close;
use fuzzrank::{
    damerau_levenshtein, damerau_levenshtein_similarity, lcs_length, lcs_similarity, levenshtein,
    levenshtein_similarity, osa_distance, osa_similarity,
};

/// Cases every edit distance agrees on: no transposition helps.
const SHARED: &[(&str, &str, usize)] = &[
    ("", "", 0),
    ("kitten", "", 6),
    ("", "sitting", 7),
    ("kitten", "kitten", 0),
    ("kitten", "sitten", 1),
    ("kitten", "kittens", 1),
    ("kitten", "kitte", 1),
    ("kitten", "vitten", 1),
    ("kitten", "kitteo", 1),
    ("kitten", "sitting", 3),
    ("intention", "execution", 5),
    ("abcdef", "azced", 3),
];

#[test]
fn test_levenshtein_table() {
    let extra = [("ca", "ac", 2), ("abcd", "badc", 3)];
    for &(a, b, expected) in SHARED.iter().chain(extra.iter()) {
        assert_eq!(levenshtein(a, b), expected, "levenshtein({:?}, {:?})", a, b);
    }
}

#[test]
fn test_osa_table() {
    let extra = [
        ("ca", "ac", 1),
        ("abcd", "badc", 2),
        ("mart", "tram", 3),
        ("abdc", "acbd", 2),
        // Both swaps would need to overlap, which OSA forbids.
        ("abcd", "cadb", 4),
    ];
    for &(a, b, expected) in SHARED.iter().chain(extra.iter()) {
        assert_eq!(osa_distance(a, b), expected, "osa_distance({:?}, {:?})", a, b);
    }
}

#[test]
fn test_damerau_levenshtein_table() {
    let extra = [
        ("ca", "ac", 1),
        ("cxa", "axc", 2),
        ("abcd", "badc", 2),
        ("abcde", "bacde", 1),
        ("abdcfe", "adbcef", 2),
        ("abcd", "ac", 2),
        ("abcd", "cadb", 3),
        ("ca", "abc", 2),
    ];
    for &(a, b, expected) in SHARED.iter().chain(extra.iter()) {
        assert_eq!(
            damerau_levenshtein(a, b),
            expected,
            "damerau_levenshtein({:?}, {:?})",
            a,
            b
        );
    }
}

#[test]
fn test_lcs_table() {
    let cases = [
        ("", "", 0),
        ("AGGTAB", "", 0),
        ("AGGTAB", "AGGTAB", 6),
        ("ABC", "DEF", 0),
        ("ABCDEF", "ABXYZ", 2),
        ("XYZABC", "UVWABC", 3),
        ("AXBYCZ", "PBYQCR", 3),
        ("AGGTAB", "GXTXAYB", 4),
        ("ABCDGH", "AEDFHR", 3),
        ("ABCDE", "ACE", 3),
    ];
    for (a, b, expected) in cases {
        assert_eq!(lcs_length(a, b), expected, "lcs_length({:?}, {:?})", a, b);
        assert_eq!(lcs_length(b, a), expected, "lcs_length({:?}, {:?})", b, a);
    }
}

#[test]
fn test_mixed_containers() {
    let owned = String::from("kitten");
    let bytes: Vec<u8> = b"sitting".to_vec();
    assert_eq!(levenshtein(&owned, &bytes), 3);
    assert_eq!(osa_distance(b"ca", "ac"), 1);
    assert_eq!(lcs_length(&bytes[..], "sit"), 3);
}

#[test]
fn test_similarities() {
    assert_close(levenshtein_similarity("kitten", "sitting"), 4.0 / 7.0, "lev");
    assert_close(osa_similarity("ca", "ac"), 0.5, "osa");
    assert_close(damerau_levenshtein_similarity("abcd", "cadb"), 0.25, "dl");
    assert_close(lcs_similarity("AGGTAB", "GXTXAYB"), 4.0 / 6.0, "lcs");
}

#[test]
fn test_similarity_empty_inputs() {
    assert_eq!(levenshtein_similarity("", ""), 1.0);
    assert_eq!(levenshtein_similarity("abc", ""), 0.0);
    assert_eq!(damerau_levenshtein_similarity("", "x"), 0.0);
    assert_eq!(lcs_similarity("", ""), 1.0);
    assert_eq!(lcs_similarity("abc", ""), 0.0);
}
