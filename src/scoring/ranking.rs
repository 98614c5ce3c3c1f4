// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking: threshold partition, then a stable descending sort.
//!
//! The partition is one linear pass; only the kept prefix is sorted.
//!
//! ```text
//! scores   0.2  0.9  0.7  0.1  0.8      threshold 0.5
//! partition
//!          0.9  0.7  0.8 | 0.1  0.2     kept = 3, suffix unranked
//! sort
//!          0.9  0.8  0.7 | ...
//! ```
//!
//! Items and scores always move together, so after either phase `scores[i]`
//! is still the score of the item at position `i`.

use std::cmp::Ordering;

use crate::collection::{Candidates, MultiKeyCandidates, Reorder};
use crate::contracts::{check_partitioned, check_sorted_descending};
use crate::transform::Transform;

use super::core::Scorer;
use super::metric::Score;

/// Move every item whose score is `>= threshold` to the front, in one
/// Lomuto-style pass. Returns how many were kept.
///
/// NaN never passes. Relative order inside either side is not preserved.
pub fn partition_by_threshold<C>(items: &mut C, scores: &mut [f64], threshold: f64) -> usize
where
    C: Reorder + ?Sized,
{
    let mut kept = 0;
    for i in 0..scores.len() {
        if scores[i] >= threshold {
            if i != kept {
                items.swap(kept, i);
                scores.swap(kept, i);
            }
            kept += 1;
        }
    }
    check_partitioned(scores, kept, threshold);
    kept
}

/// Descending by score, NaN after every number, equal scores keep their order.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}

/// Stable sort of the first `scores.len()` items by descending score.
///
/// Sorts an index permutation, then applies it to items and scores together
/// by following its cycles, so every item moves at most once per cycle.
pub fn sort_by_score<C>(items: &mut C, scores: &mut [f64])
where
    C: Reorder + ?Sized,
{
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&i, &j| descending(scores[i], scores[j]));
    apply_permutation(items, scores, &mut order);
    check_sorted_descending(scores);
}

/// Reorder so that position `k` receives what was at `order[k]`.
/// `order` is consumed as scratch space.
fn apply_permutation<C>(items: &mut C, scores: &mut [f64], order: &mut [usize])
where
    C: Reorder + ?Sized,
{
    for start in 0..order.len() {
        if order[start] == start {
            continue;
        }
        let mut current = start;
        loop {
            let next = order[current];
            order[current] = current;
            if next == start {
                break;
            }
            items.swap(current, next);
            scores.swap(current, next);
            current = next;
        }
    }
}

/// Result of [`Sorter::rank`]: the kept count and the reordered scores.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    /// Items `[0, kept)` passed the threshold and are sorted.
    pub kept: usize,
    /// Index-aligned with the reordered collection.
    pub scores: Vec<f64>,
}

impl Ranked {
    /// Scores of the kept, sorted prefix.
    pub fn kept_scores(&self) -> &[f64] {
        &self.scores[..self.kept]
    }
}

/// Scorer plus threshold: score, filter and rank in place.
#[derive(Debug, Clone)]
pub struct Sorter<M = super::metric::Metric, T = crate::transform::Pipeline> {
    pub scorer: Scorer<M, T>,
    /// Minimum score to keep. `0.0` disables filtering.
    pub threshold: f64,
}

impl Default for Sorter {
    fn default() -> Self {
        Self {
            scorer: Scorer::default(),
            threshold: 0.0,
        }
    }
}

impl<M, T> Sorter<M, T> {
    pub fn new(scorer: Scorer<M, T>, threshold: f64) -> Self {
        Self { scorer, threshold }
    }
}

impl<M: Score, T: Transform> Sorter<M, T> {
    /// Reorder `candidates` so the best matches for `target` come first.
    ///
    /// Returns how many candidates passed the threshold (all of them when the
    /// threshold is 0). Those occupy `[0, kept)` in descending score order;
    /// the rest follow in unspecified order.
    pub fn sort<C, Q>(&self, candidates: &mut C, target: &Q) -> usize
    where
        C: Candidates + Reorder + ?Sized,
        Q: AsRef<[u8]> + ?Sized,
    {
        self.rank(candidates, target).kept
    }

    /// [`Sorter::sort`] for candidates with several keys each.
    pub fn sort_multi<C, Q>(&self, candidates: &mut C, target: &Q) -> usize
    where
        C: MultiKeyCandidates + Reorder + ?Sized,
        Q: AsRef<[u8]> + ?Sized,
    {
        self.rank_multi(candidates, target).kept
    }

    /// Like [`Sorter::sort`], but also hands back the reordered scores.
    pub fn rank<C, Q>(&self, candidates: &mut C, target: &Q) -> Ranked
    where
        C: Candidates + Reorder + ?Sized,
        Q: AsRef<[u8]> + ?Sized,
    {
        let scores = self.scorer.score(&*candidates, target);
        self.order(candidates, scores)
    }

    pub fn rank_multi<C, Q>(&self, candidates: &mut C, target: &Q) -> Ranked
    where
        C: MultiKeyCandidates + Reorder + ?Sized,
        Q: AsRef<[u8]> + ?Sized,
    {
        let scores = self.scorer.score_multi(&*candidates, target);
        self.order(candidates, scores)
    }

    /// Partition and sort an already computed score table.
    pub fn order<C>(&self, candidates: &mut C, mut scores: Vec<f64>) -> Ranked
    where
        C: Reorder + ?Sized,
    {
        let total = scores.len();
        let kept = if self.threshold != 0.0 {
            partition_by_threshold(candidates, &mut scores, self.threshold)
        } else {
            total
        };
        sort_by_score(candidates, &mut scores[..kept]);
        tracing::debug!(total, kept, threshold = self.threshold, "ranked candidates");
        Ranked { kept, scores }
    }
}
