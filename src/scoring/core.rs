// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: one number per candidate, index-aligned with the collection.
//!
//! The target is transformed once per call; each candidate key is transformed
//! as it is read. A key the transform rejects is scored raw, so one odd record
//! never drops out of the results.

use std::borrow::Cow;

use crate::collection::{Candidates, MultiKeyCandidates};
use crate::transform::{apply_or_raw, Pipeline, Transform, TransformKind};

use super::metric::{Metric, Score};

/// Metric plus optional pre-transform.
///
/// `Scorer::default()` is frequency similarity over lowercased input, which is
/// a good first choice for typo-tolerant lookup.
#[derive(Debug, Clone)]
pub struct Scorer<M = Metric, T = Pipeline> {
    pub metric: M,
    pub transform: Option<T>,
    /// Fold ASCII case at read time, without copying.
    pub ignore_case: bool,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            metric: Metric::FrequencySimilarity,
            transform: Some(Pipeline(vec![TransformKind::Lowercase])),
            ignore_case: false,
        }
    }
}

impl<M, T> Scorer<M, T> {
    /// Bare metric: no transform, case-sensitive.
    pub fn new(metric: M) -> Self {
        Self {
            metric,
            transform: None,
            ignore_case: false,
        }
    }

    pub fn with_transform(mut self, transform: T) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }
}

impl<M: Score, T: Transform> Scorer<M, T> {
    fn prepare<'a>(&self, input: &'a [u8]) -> Cow<'a, [u8]> {
        match &self.transform {
            Some(transform) => apply_or_raw(transform, input),
            None => Cow::Borrowed(input),
        }
    }

    #[inline]
    fn compare(&self, key: &[u8], target: &[u8]) -> f64 {
        let key = self.prepare(key);
        if self.ignore_case {
            self.metric.score_ignore_case(&key, target)
        } else {
            self.metric.score(&key, target)
        }
    }

    /// Best score over every key of candidate `index`; 0 when it has none.
    fn best_key<C>(&self, candidates: &C, index: usize, target: &[u8]) -> f64
    where
        C: MultiKeyCandidates + ?Sized,
    {
        let mut best: Option<f64> = None;
        candidates.for_each_key(index, &mut |key| {
            let score = self.compare(key, target);
            best = Some(best.map_or(score, |b| b.max(score)));
        });
        best.unwrap_or(0.0)
    }

    /// Score one pair through the transform and metric.
    pub fn score_pair<A, B>(&self, candidate: &A, target: &B) -> f64
    where
        A: AsRef<[u8]> + ?Sized,
        B: AsRef<[u8]> + ?Sized,
    {
        let target = self.prepare(target.as_ref());
        self.compare(candidate.as_ref(), &target)
    }

    /// One score per candidate, in collection order.
    pub fn score<C, Q>(&self, candidates: &C, target: &Q) -> Vec<f64>
    where
        C: Candidates + ?Sized,
        Q: AsRef<[u8]> + ?Sized,
    {
        let _span = tracing::debug_span!("score", candidates = candidates.len()).entered();
        let target = self.prepare(target.as_ref());
        (0..candidates.len())
            .map(|i| self.compare(candidates.key(i), &target))
            .collect()
    }

    /// One score per candidate: the best over all of its keys.
    pub fn score_multi<C, Q>(&self, candidates: &C, target: &Q) -> Vec<f64>
    where
        C: MultiKeyCandidates + ?Sized,
        Q: AsRef<[u8]> + ?Sized,
    {
        let _span = tracing::debug_span!("score_multi", candidates = candidates.len()).entered();
        let target = self.prepare(target.as_ref());
        (0..candidates.len())
            .map(|i| self.best_key(candidates, i, &target))
            .collect()
    }
}

#[cfg(feature = "parallel")]
impl<M, T> Scorer<M, T>
where
    M: Score + Sync,
    T: Transform + Sync,
{
    /// [`Scorer::score`] across the rayon pool. Same output.
    pub fn score_parallel<C, Q>(&self, candidates: &C, target: &Q) -> Vec<f64>
    where
        C: Candidates + Sync + ?Sized,
        Q: AsRef<[u8]> + ?Sized,
    {
        use rayon::prelude::*;

        let _span =
            tracing::debug_span!("score_parallel", candidates = candidates.len()).entered();
        let target = self.prepare(target.as_ref());
        (0..candidates.len())
            .into_par_iter()
            .map(|i| self.compare(candidates.key(i), &target))
            .collect()
    }

    /// [`Scorer::score_multi`] across the rayon pool. Same output.
    pub fn score_multi_parallel<C, Q>(&self, candidates: &C, target: &Q) -> Vec<f64>
    where
        C: MultiKeyCandidates + Sync + ?Sized,
        Q: AsRef<[u8]> + ?Sized,
    {
        use rayon::prelude::*;

        let _span =
            tracing::debug_span!("score_multi_parallel", candidates = candidates.len()).entered();
        let target = self.prepare(target.as_ref());
        (0..candidates.len())
            .into_par_iter()
            .map(|i| self.best_key(candidates, i, &target))
            .collect()
    }
}
