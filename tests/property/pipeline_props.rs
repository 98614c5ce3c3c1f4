//! Partition and sort guarantees of the pipeline.

use super::common::{candidate_list, small_alphabet_word};
use fuzzrank::{Metric, Scorer, Sorter};
use proptest::prelude::*;

fn sorter(metric: Metric, threshold: f64) -> Sorter {
    Sorter::new(Scorer::new(metric), threshold)
}

fn metric_strategy() -> impl Strategy<Value = Metric> {
    prop::sample::select(vec![
        Metric::FrequencySimilarity,
        Metric::Jaro,
        Metric::LevenshteinSimilarity,
        Metric::LcsSimilarity,
    ])
}

proptest! {
    #[test]
    fn prop_kept_prefix_is_sorted_and_complete(
        mut candidates in candidate_list(),
        target in small_alphabet_word(),
        metric in metric_strategy(),
        threshold in 0.05f64..1.0,
    ) {
        let original = candidates.clone();
        let s = sorter(metric.clone(), threshold);
        let ranked = s.rank(&mut candidates, &target);

        // Same multiset of candidates.
        let mut before = original.clone();
        let mut after = candidates.clone();
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);

        // Kept prefix passes and is descending; the rest fails.
        for (i, candidate) in candidates.iter().enumerate() {
            let score = metric.score(candidate, &target);
            prop_assert_eq!(score, ranked.scores[i]);
            if i < ranked.kept {
                prop_assert!(score >= threshold);
            } else {
                prop_assert!(score < threshold);
            }
        }
        prop_assert!(ranked.kept_scores().windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn prop_resorting_kept_prefix_is_noop(
        mut candidates in candidate_list(),
        target in small_alphabet_word(),
        threshold in 0.05f64..1.0,
    ) {
        let s = sorter(Metric::FrequencySimilarity, threshold);
        let kept = s.sort(&mut candidates, &target);
        let mut prefix = candidates[..kept].to_vec();
        let again = s.sort(&mut prefix, &target);
        prop_assert_eq!(again, kept);
        prop_assert_eq!(&prefix[..], &candidates[..kept]);
    }

    #[test]
    fn prop_zero_threshold_keeps_everything(
        mut candidates in candidate_list(),
        target in small_alphabet_word(),
    ) {
        let len = candidates.len();
        prop_assert_eq!(sorter(Metric::Jaro, 0.0).sort(&mut candidates, &target), len);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn prop_parallel_scores_match(
        candidates in candidate_list(),
        target in small_alphabet_word(),
    ) {
        let scorer = Scorer::default();
        prop_assert_eq!(
            scorer.score_parallel(&candidates, &target),
            scorer.score(&candidates, &target)
        );
    }
}
