// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::seq::{trim_affix, ByteSeq};

/// Length of the longest common subsequence of `a` and `b`.
///
/// A common prefix and suffix always belong to some LCS, so they are counted
/// directly and only the interior goes through the two-row DP.
///
/// ```
/// use fuzzrank::lcs_length;
///
/// assert_eq!(lcs_length("AGGTAB", "GXTXAYB"), 4); // "GTAB"
/// ```
pub fn lcs_length<A, B>(a: &A, b: &B) -> usize
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let (a, b, affix) = trim_affix(a, b);
    let interior = if a.len() >= b.len() {
        lcs_rows(&a, &b)
    } else {
        lcs_rows(&b, &a)
    };
    affix.total() + interior
}

fn lcs_rows<L, S>(long: &L, short: &S) -> usize
where
    L: ByteSeq + ?Sized,
    S: ByteSeq + ?Sized,
{
    let n = short.len();
    if n == 0 {
        return 0;
    }

    let mut buf = vec![0usize; 2 * (n + 1)];
    let (mut prev, mut curr) = buf.split_at_mut(n + 1);

    for i in 0..long.len() {
        let ai = long.at(i);
        for j in 0..n {
            curr[j + 1] = if ai == short.at(j) {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
