// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Frequency distance: a linear-time "how far did each letter move" heuristic.
//!
//! Edit distances are quadratic. This heuristic only looks at where each byte
//! value occurs, which is enough to rank candidates for typo-tolerant lookup.
//!
//! For every byte value `c`, take the ascending positions of `c` in `a` and in
//! `b`. The shorter list `S` is aligned against a contiguous run of the longer
//! list `L`, starting at the occurrence in `L` nearest to `S[0]`:
//!
//! ```text
//! a = "apple"   p at [1, 2]
//! b = "aple"    p at [1]
//!                     ^ pairs with L[0] = 1, offset 0; L[1] is unpaired
//! ```
//!
//! Each pair costs its position offset scaled by `max(|a|, |b|) − 1`, and each
//! unpaired occurrence costs 1:
//!
//! ```text
//! distance = (2·Σ offset + Σ unpaired) / (|a| + |b|)
//! ```
//!
//! A pair covers two elements and costs at most 2, so the distance stays in
//! `[0, 1]`. Identical inputs score 0, disjoint alphabets score 1.

use crate::contracts::check_unit_interval;
use crate::freq::FrequencyTable;
use crate::seq::{trim_affix, ByteSeq};

/// Fill `out` with the positions of `seq`, grouped by byte value and ascending
/// within each group. Returns the group boundaries: byte `c` owns
/// `out[bounds[c]..bounds[c + 1]]`.
fn bucket_positions<S: ByteSeq + ?Sized>(seq: &S, out: &mut [usize]) -> [usize; 257] {
    let table = FrequencyTable::new(seq);
    let mut bounds = [0usize; 257];
    for c in 0..256 {
        bounds[c + 1] = bounds[c] + table.counts()[c] as usize;
    }
    let mut cursor = bounds;
    for i in 0..seq.len() {
        let c = seq.at(i) as usize;
        out[cursor[c]] = i;
        cursor[c] += 1;
    }
    bounds
}

/// Index of the element of `sorted` closest to `target`, earlier on ties.
fn nearest_index(sorted: &[usize], target: usize) -> usize {
    let idx = sorted.partition_point(|&p| p < target);
    if idx == 0 {
        return 0;
    }
    if idx == sorted.len() {
        return idx - 1;
    }
    if target - sorted[idx - 1] <= sorted[idx] - target {
        idx - 1
    } else {
        idx
    }
}

/// Frequency distance in `[0, 1]`. Zero when both inputs are empty.
///
/// Never panics. Time O(|a| + |b| + 256·log), one allocation of `|a| + |b|`
/// positions.
pub fn frequency_distance<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }

    let mut positions = vec![0usize; total];
    let (pa, pb) = positions.split_at_mut(a.len());
    let bounds_a = bucket_positions(a, pa);
    let bounds_b = bucket_positions(b, pb);

    let mut offset_sum = 0usize;
    let mut unpaired = 0usize;
    for c in 0..256 {
        let p = &pa[bounds_a[c]..bounds_a[c + 1]];
        let q = &pb[bounds_b[c]..bounds_b[c + 1]];
        let (short, long) = if p.len() <= q.len() { (p, q) } else { (q, p) };
        let slack = long.len() - short.len();
        unpaired += slack;

        let Some(&first) = short.first() else {
            continue;
        };
        let start = nearest_index(long, first).min(slack);
        offset_sum += short
            .iter()
            .zip(&long[start..])
            .map(|(&s, &l)| s.abs_diff(l))
            .sum::<usize>();
    }

    let scale = a.len().max(b.len()).saturating_sub(1).max(1) as f64;
    let distance = (2.0 * offset_sum as f64 / scale + unpaired as f64) / total as f64;
    check_unit_interval("frequency_distance", distance);
    distance
}

/// `1 − frequency_distance`. The pipeline's default metric.
pub fn frequency_similarity<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    1.0 - frequency_distance(a, b)
}

/// Frequency distance of the inputs with their common affix removed.
///
/// Trimmed elements count as perfect matches: the remainder's distance is
/// rescaled by `(|a'| + |b'|) / (|a| + |b|)`.
pub fn frequency_distance_trimmed<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    let (ta, tb, _) = trim_affix(a, b);
    let rest = ta.len() + tb.len();
    frequency_distance(&ta, &tb) * rest as f64 / total as f64
}

/// `1 − frequency_distance_trimmed`.
pub fn frequency_similarity_trimmed<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    1.0 - frequency_distance_trimmed(a, b)
}
