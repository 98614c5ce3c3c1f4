// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the coefficient library.
//!
//! Checked variants must never panic, bounded coefficients must stay in
//! `[0, 1]`, and every named metric must give a finite score.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::{
    checked_dice_sorensen, checked_horn_morisita_overlap, checked_jaccard,
    checked_morisita_overlap, checked_overlap_coefficient, frequency_distance,
    frequency_distance_trimmed, jaro, jaro_winkler_bidirectional, AffixWeight, Grams, Metric,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: Vec<u8>,
    b: Vec<u8>,
    bigrams: bool,
}

fn in_unit(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fuzz_target!(|input: PairInput| {
    let (a, b) = (&input.a[..], &input.b[..]);
    let grams = if input.bigrams {
        Grams::Bigram
    } else {
        Grams::Character
    };

    for value in [
        checked_dice_sorensen(a, b, grams),
        checked_jaccard(a, b, grams),
        checked_overlap_coefficient(a, b, Grams::Character),
    ]
    .into_iter()
    .flatten()
    {
        assert!(in_unit(value), "{}", value);
    }
    if let Some(horn) = checked_horn_morisita_overlap(a, b) {
        assert!(horn.is_finite());
    }
    if let Some(morisita) = checked_morisita_overlap(a, b) {
        assert!(morisita.is_finite());
    }

    assert!(in_unit(jaro(a, b)));
    assert!(in_unit(frequency_distance(a, b)));
    assert!(in_unit(frequency_distance_trimmed(a, b)));

    let w = AffixWeight::WINKLER;
    assert!(jaro_winkler_bidirectional(a, b, &w, &w).is_finite());

    for name in Metric::NAMES {
        if let Ok(metric) = name.parse::<Metric>() {
            assert!(metric.score(a, b).is_finite(), "{}", name);
        }
    }
});
