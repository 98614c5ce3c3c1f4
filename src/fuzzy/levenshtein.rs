// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein distance with two rolling rows.
//!
//! The classic Wagner-Fischer recurrence, keeping only the previous and the
//! current row. Rows are sized by the shorter input, and the common affix is
//! stripped before the DP starts, so "photograph" vs "photography" costs a
//! 0 × 1 matrix instead of 10 × 11.

use crate::contracts::check_distance_bounds;
use crate::seq::{trim_affix, ByteSeq};

/// Minimum number of single-element insertions, deletions and substitutions
/// turning `a` into `b`.
///
/// `levenshtein(∅, x) = |x|`, `levenshtein(∅, ∅) = 0`.
///
/// Time O(|a|·|b|) after affix trimming, space O(min(|a|, |b|)).
pub fn levenshtein<A, B>(a: &A, b: &B) -> usize
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let (ta, tb, _) = trim_affix(a, b);
    let distance = if ta.len() >= tb.len() {
        levenshtein_rows(&ta, &tb)
    } else {
        levenshtein_rows(&tb, &ta)
    };
    check_distance_bounds("levenshtein", distance, a.len(), b.len());
    distance
}

/// Untrimmed two-row DP. `short` must not be longer than `long`.
pub(crate) fn levenshtein_rows<L, S>(long: &L, short: &S) -> usize
where
    L: ByteSeq + ?Sized,
    S: ByteSeq + ?Sized,
{
    debug_assert!(long.len() >= short.len());
    let n = short.len();
    if n == 0 {
        return long.len();
    }

    // One allocation for both rows.
    let mut buf = vec![0usize; 2 * (n + 1)];
    let (mut prev, mut curr) = buf.split_at_mut(n + 1);

    // Row 0: distance from the empty prefix of `long` is the number of inserts.
    for (j, cell) in prev.iter_mut().enumerate() {
        *cell = j;
    }

    for i in 0..long.len() {
        let ai = long.at(i);
        curr[0] = i + 1;
        for j in 0..n {
            let cost = usize::from(ai != short.at(j));
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    // After the last swap the final row lives in `prev`.
    prev[n]
}
