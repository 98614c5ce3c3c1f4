//! Jaro and Jaro-Winkler values.

use super::common::assert_close;
use fuzzrank::{jaro, jaro_winkler, jaro_winkler_bidirectional, AffixWeight, Error};

#[test]
fn test_jaro_table() {
    let cases = [
        ("", "", 1.0),
        ("kitten", "", 0.0),
        ("", "sitting", 0.0),
        ("kitten", "kitten", 1.0),
        ("kitten", "sitten", 0.888888888888889),
        ("MARTHA", "MARHTA", 0.9444444444444445),
        ("CRATE", "TRACE", 0.7333333333333333),
        ("foo", "bar", 0.0),
        ("aaa", "aab", 0.777777777777778),
        ("very", "vary", 0.8333333333333333),
    ];
    for (a, b, expected) in cases {
        assert_close(jaro(a, b), expected, &format!("jaro({:?}, {:?})", a, b));
        assert_close(jaro(b, a), expected, &format!("jaro({:?}, {:?})", b, a));
    }
}

#[test]
fn test_odd_disagreements_round_down() {
    // Matched "bca" against "abc": three disagreements, one transposition.
    let expected = (3.0 / 6.0 + 3.0 / 3.0 + 2.0 / 3.0) / 3.0;
    assert_close(jaro("bcaaaa", "abc"), expected, "long first");
    assert_close(jaro("abc", "bcaaaa"), expected, "short first");
    assert!((jaro("abc", "bcaaaa") - strsim::jaro("abc", "bcaaaa")).abs() < 1e-12);
}

#[test]
fn test_single_characters_match_themselves() {
    assert_eq!(jaro("a", "a"), 1.0);
    assert_eq!(jaro("a", "b"), 0.0);
}

#[test]
fn test_jaro_winkler_unbounded_prefix() {
    let unbounded = AffixWeight {
        scaling: 0.1,
        limit: None,
    };
    let cases = [
        ("", "", 1.0),
        ("kitten", "", 0.0),
        ("", "sitting", 0.0),
        ("kitten", "kitten", 1.0),
        ("foo", "bar", 0.0),
    ];
    for (a, b, expected) in cases {
        assert_close(
            jaro_winkler(a, b, &unbounded),
            expected,
            &format!("jaro_winkler({:?}, {:?})", a, b),
        );
    }
}

#[test]
fn test_jaro_winkler_classic_pairs() {
    let martha = jaro_winkler("MARTHA", "MARHTA", &AffixWeight::WINKLER);
    assert!((martha - 0.9611111111111111).abs() < 1e-12, "{}", martha);
    let dixon = jaro_winkler("DIXON", "DICKSONX", &AffixWeight::WINKLER);
    assert!((dixon - 0.8133333333333332).abs() < 1e-12, "{}", dixon);
}

#[test]
fn test_prefix_limit_caps_the_boost() {
    let j = jaro("abcdefgh", "abcdefxy");
    let capped = jaro_winkler("abcdefgh", "abcdefxy", &AffixWeight::WINKLER);
    assert_close(capped, j + 4.0 * 0.1 * (1.0 - j), "capped at 4");
}

#[test]
fn test_bidirectional_counts_both_ends() {
    let w = AffixWeight::WINKLER;
    let j = jaro("abcxyz", "abdxyz");
    // prefix "ab" (2) plus suffix "xyz" (3)
    assert_close(
        jaro_winkler_bidirectional("abcxyz", "abdxyz", &w, &w),
        j + 5.0 * 0.1 * (1.0 - j),
        "bidirectional",
    );
    // With no shared suffix it reduces to plain Jaro-Winkler.
    assert_close(
        jaro_winkler_bidirectional("MARTHA", "MARHTA", &w, &w),
        jaro_winkler("MARTHA", "MARHTA", &w),
        "no suffix",
    );
}

#[test]
fn test_negative_scaling_penalizes() {
    let penalty = AffixWeight {
        scaling: -0.1,
        limit: Some(4),
    };
    assert!(jaro_winkler("MARTHA", "MARHTA", &penalty) < jaro("MARTHA", "MARHTA"));
}

#[test]
fn test_affix_weight_validation() {
    assert!(AffixWeight::new(0.25, Some(2)).is_ok());
    assert!(matches!(
        AffixWeight::new(1.5, None),
        Err(Error::ScalingOutOfRange(s)) if s == 1.5
    ));
    assert!(AffixWeight::new(f64::NAN, None).is_err());
}

#[test]
#[should_panic(expected = "outside [-1, 1]")]
fn test_jaro_winkler_rejects_bad_scaling() {
    let bad = AffixWeight {
        scaling: 2.0,
        limit: None,
    };
    let _ = jaro_winkler("a", "a", &bad);
}
