// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the sort pipeline.
//!
//! After a sort the collection is a permutation of the input, the kept prefix
//! is descending and passes the threshold, and the suffix fails it.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::{Metric, Scorer, Sorter};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RankInput {
    candidates: Vec<Vec<u8>>,
    target: Vec<u8>,
    /// Mapped into [0, 1]
    threshold: u8,
    metric: u8,
}

fuzz_target!(|input: RankInput| {
    let metric = match input.metric % 4 {
        0 => Metric::FrequencySimilarity,
        1 => Metric::Jaro,
        2 => Metric::LevenshteinSimilarity,
        _ => Metric::DiceSorensen {
            grams: fuzzrank::Grams::Bigram,
        },
    };
    let threshold = f64::from(input.threshold) / 255.0;
    let sorter: Sorter = Sorter::new(Scorer::new(metric.clone()), threshold);

    let mut candidates: Vec<Vec<u8>> = input.candidates.into_iter().take(64).collect();
    let mut before = candidates.clone();
    let ranked = sorter.rank(&mut candidates, &input.target[..]);

    let mut after = candidates.clone();
    before.sort();
    after.sort();
    assert_eq!(before, after);

    let kept = ranked.kept;
    assert!(ranked.kept_scores().windows(2).all(|w| w[0] >= w[1]));
    for (i, candidate) in candidates.iter().enumerate() {
        let score = metric.score(&candidate[..], &input.target[..]);
        assert_eq!(score, ranked.scores[i]);
        if threshold != 0.0 {
            assert_eq!(i < kept, score >= threshold, "{} at {}", score, i);
        }
    }
});
