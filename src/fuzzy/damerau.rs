// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unrestricted Damerau-Levenshtein distance (Lowrance-Wagner).
//!
//! Unlike OSA, a transposed pair may be edited again, which needs the whole
//! matrix: the transposition case jumps back to an arbitrary earlier row and
//! column. Two lookups make that jump O(1):
//!
//! - `last_row[c]`: the last row of `a` where byte `c` was seen,
//! - `last_col`: within the current row, the last column of `b` that matched.
//!
//! The matrix carries one extra sentinel row and column filled with `m + n`,
//! so transpositions reaching before the start are never chosen.

use crate::contracts::check_distance_bounds;
use crate::seq::ByteSeq;

use super::levenshtein_rows;

/// Minimum number of insertions, deletions, substitutions and adjacent
/// transpositions turning `a` into `b`, with no restriction on editing a
/// transposed pair again.
///
/// ```
/// use fuzzrank::damerau_levenshtein;
///
/// assert_eq!(damerau_levenshtein("ca", "ac"), 1);
/// assert_eq!(damerau_levenshtein("ca", "abc"), 2);
/// ```
pub fn damerau_levenshtein<A, B>(a: &A, b: &B) -> usize
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let distance = if a.len() >= b.len() {
        damerau_matrix(a, b)
    } else {
        damerau_matrix(b, a)
    };
    check_distance_bounds("damerau_levenshtein", distance, a.len(), b.len());
    distance
}

fn damerau_matrix<L, S>(long: &L, short: &S) -> usize
where
    L: ByteSeq + ?Sized,
    S: ByteSeq + ?Sized,
{
    let (m, n) = (long.len(), short.len());
    // No transposition fits in fewer than two elements.
    if n < 2 {
        return levenshtein_rows(long, short);
    }

    let stride = n + 2;
    let sentinel = m + n;
    let mut d = vec![0usize; (m + 2) * stride];
    let mut last_row = [0usize; 256];

    d[0] = sentinel;
    for i in 0..=m {
        d[(i + 1) * stride] = sentinel;
        d[(i + 1) * stride + 1] = i;
    }
    for j in 0..=n {
        d[j + 1] = sentinel;
        d[stride + j + 1] = j;
    }

    for i in 1..=m {
        let ai = long.at(i - 1);
        let mut last_col = 0;
        for j in 1..=n {
            let bj = short.at(j - 1);
            let k = last_row[bj as usize];
            let l = last_col;
            let cost = if ai == bj {
                last_col = j;
                0
            } else {
                1
            };

            let substitution = d[i * stride + j] + cost;
            let insertion = d[(i + 1) * stride + j] + 1;
            let deletion = d[i * stride + j + 1] + 1;
            let transposition = d[k * stride + l] + (i - k - 1) + 1 + (j - l - 1);

            d[(i + 1) * stride + j + 1] = substitution
                .min(insertion)
                .min(deletion)
                .min(transposition);
        }
        last_row[ai as usize] = i;
    }

    d[(m + 1) * stride + n + 1]
}
