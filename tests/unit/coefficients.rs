//! Set coefficients, the frequency heuristic and affix weighting.

use super::common::assert_close;
use fuzzrank::testing::{FREQUENCY_NO_CRASH, FREQUENCY_TRIMMED_NO_CRASH};
use fuzzrank::{
    affix_weighted, checked_dice_sorensen, checked_jaccard, checked_morisita_overlap,
    checked_overlap_coefficient, checked_tversky, dice_sorensen, frequency_distance,
    frequency_distance_trimmed, frequency_similarity, horn_morisita_overlap, jaccard, jaro,
    overlap_coefficient, tversky, AffixWeight, Grams,
};

#[test]
fn test_character_coefficients() {
    // night/nacht share n, h, t
    assert_close(dice_sorensen("night", "nacht", Grams::Character), 0.6, "dice");
    assert_close(jaccard("night", "nacht", Grams::Character), 3.0 / 7.0, "jaccard");
    assert_close(
        overlap_coefficient("abc", "abcdef", Grams::Character),
        1.0,
        "overlap",
    );
}

#[test]
fn test_bigram_coefficients() {
    // only "ht" is shared
    assert_close(dice_sorensen("night", "nacht", Grams::Bigram), 0.2, "dice");
    assert_close(jaccard("night", "nacht", Grams::Bigram), 1.0 / 9.0, "jaccard");
}

#[test]
fn test_tversky_specializations() {
    for (a, b) in [("night", "nacht"), ("hello", "yellow"), ("abc", "xyz")] {
        assert_close(
            tversky(a, b, 0.5, 0.5, Grams::Character),
            dice_sorensen(a, b, Grams::Character),
            "tversky(0.5, 0.5) is dice",
        );
        assert_close(
            tversky(a, b, 1.0, 1.0, Grams::Character),
            jaccard(a, b, Grams::Character),
            "tversky(1, 1) is jaccard",
        );
    }
}

#[test]
fn test_degenerate_inputs_are_none() {
    assert_eq!(checked_dice_sorensen("", "", Grams::Character), None);
    assert_eq!(checked_jaccard("", "", Grams::Bigram), None);
    assert_eq!(checked_overlap_coefficient("abc", "", Grams::Character), None);
    assert_eq!(checked_tversky("", "", 0.5, 0.5, Grams::Character), None);
    assert_eq!(checked_tversky("ab", "cd", 0.0, 0.0, Grams::Character), None);
    // no element repeats anywhere, so both dispersions are zero
    assert_eq!(checked_morisita_overlap("abc", "def"), None);
    assert_eq!(checked_morisita_overlap("a", "aa"), None);
}

#[test]
#[should_panic(expected = "dice_sorensen")]
fn test_dice_panics_on_empty_pair() {
    let _ = dice_sorensen("", "", Grams::Character);
}

#[test]
fn test_horn_morisita_identical_is_one() {
    assert_close(horn_morisita_overlap("abc", "abc"), 1.0, "horn");
    assert_close(horn_morisita_overlap("aabbc", "aabbc"), 1.0, "horn");
}

#[test]
fn test_frequency_no_crash_suites() {
    for &(a, b) in FREQUENCY_NO_CRASH {
        let d = frequency_distance(a, b);
        assert!((0.0..=1.0).contains(&d), "({:?}, {:?}) -> {}", a, b, d);
        assert_eq!(d, frequency_distance(b, a), "({:?}, {:?})", a, b);
    }
    for &(a, b) in FREQUENCY_TRIMMED_NO_CRASH {
        let d = frequency_distance_trimmed(a, b);
        assert!((0.0..=1.0).contains(&d), "({:?}, {:?}) -> {}", a, b, d);
    }
}

#[test]
fn test_frequency_similarity_values() {
    assert_close(frequency_similarity("apple", "apple"), 1.0, "identical");
    assert_close(frequency_similarity("apple", "aple"), 7.0 / 9.0, "aple");
    assert_close(frequency_similarity("apple", "appel"), 0.9, "appel");
    assert_close(frequency_similarity("apple", "application"), 0.5, "application");
    assert_eq!(frequency_distance("", ""), 0.0);
}

#[test]
fn test_affix_weighted_with_jaro() {
    let w = AffixWeight {
        scaling: 1.0,
        limit: Some(3),
    };
    // "pre" is capped at three, the middle "fix" vs "fab" goes through Jaro.
    let score = affix_weighted("prefix", "prefab", Some(&w), None, |x, y| jaro(&x, &y));
    let middle = jaro("fix", "fab");
    assert_close(score, (3.0 + 3.0 * middle) / 6.0, "affix");
}

#[test]
fn test_affix_weighted_identical_skips_inner() {
    let w = AffixWeight {
        scaling: 1.0,
        limit: None,
    };
    let score = affix_weighted("same", "same", Some(&w), Some(&w), |_, _| {
        panic!("inner must not run on an empty remainder")
    });
    assert_close(score, 1.0, "identical");
}
