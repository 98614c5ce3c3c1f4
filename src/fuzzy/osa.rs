// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optimal String Alignment: Levenshtein plus one-shot adjacent swaps.

use crate::contracts::check_distance_bounds;
use crate::seq::{trim_affix, ByteSeq};

use super::levenshtein_rows;

/// OSA distance: insert, delete, substitute, or swap two adjacent elements,
/// where a swapped pair is never edited again.
///
/// Three rolling rows: the transposition case reads the row two steps back.
/// With fewer than 2 elements on the shorter side no swap is possible and the
/// result is plain Levenshtein.
///
/// ```
/// use fuzzrank::osa_distance;
///
/// assert_eq!(osa_distance("ca", "ac"), 1);
/// // Overlapping swaps are not allowed.
/// assert_eq!(osa_distance("abcd", "cadb"), 4);
/// ```
pub fn osa_distance<A, B>(a: &A, b: &B) -> usize
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let (ta, tb, _) = trim_affix(a, b);
    let distance = if ta.len() >= tb.len() {
        osa_rows(&ta, &tb)
    } else {
        osa_rows(&tb, &ta)
    };
    check_distance_bounds("osa_distance", distance, a.len(), b.len());
    distance
}

fn osa_rows<L, S>(long: &L, short: &S) -> usize
where
    L: ByteSeq + ?Sized,
    S: ByteSeq + ?Sized,
{
    let n = short.len();
    if n < 2 {
        return levenshtein_rows(long, short);
    }

    let mut buf = vec![0usize; 3 * (n + 1)];
    let (two_back, rest) = buf.split_at_mut(n + 1);
    let (prev, curr) = rest.split_at_mut(n + 1);
    let (mut two_back, mut prev, mut curr) = (two_back, prev, curr);

    for (j, cell) in prev.iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=long.len() {
        let ai = long.at(i - 1);
        curr[0] = i;
        for j in 1..=n {
            let bj = short.at(j - 1);
            let cost = usize::from(ai != bj);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && ai == short.at(j - 2) && long.at(i - 2) == bj {
                best = best.min(two_back[j - 2] + 1);
            }
            curr[j] = best;
        }
        // two_back <- prev <- curr, recycling the oldest row.
        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
