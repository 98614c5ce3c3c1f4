// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. The oracles
//! here are the textbook full-matrix recurrences with no trimming, no row
//! rotation and no argument reordering, so they can check the fast engines.

#![doc(hidden)]

/// Full-matrix Levenshtein.
pub fn naive_levenshtein(a: &[u8], b: &[u8]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for i in 0..=m {
        d[i][0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[m][n]
}

/// Full-matrix optimal string alignment.
pub fn naive_osa(a: &[u8], b: &[u8]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for i in 0..=m {
        d[i][0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                d[i][j] = d[i][j].min(d[i - 2][j - 2] + 1);
            }
        }
    }
    d[m][n]
}

/// Full-matrix longest common subsequence.
pub fn naive_lcs(a: &[u8], b: &[u8]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            d[i][j] = if a[i - 1] == b[j - 1] {
                d[i - 1][j - 1] + 1
            } else {
                d[i - 1][j].max(d[i][j - 1])
            };
        }
    }
    d[m][n]
}

/// Pairs the frequency heuristic must handle without panicking.
pub const FREQUENCY_NO_CRASH: &[(&str, &str)] = &[
    ("", ""),
    ("a", "a"),
    ("abb", "bba"),
    ("abc", "acb"),
    ("abc", "bac"),
    ("aabb", "abab"),
    ("aaaa", "bbbb"),
    ("abc", "abcd"),
    ("abcd", "abc"),
    ("apple", "apxle"),
    ("apple", "apxpl"),
    ("apple", "axple"),
    ("apple", "bpple"),
    ("hello", "world"),
    ("testing", "test"),
    ("test", "testing"),
    ("aaaaa", "aaaba"),
    ("aaaba", "aaaaa"),
    ("aaaaa", "aabba"),
    ("aabba", "aaaaa"),
    ("abcde", "edcba"),
    ("microsoft", "mitsubishi"),
    ("intention", "execution"),
    ("aaaa", "aaa"),
    ("aaa", "aaaa"),
    ("cat", "act"),
    ("dog", "god"),
    ("listen", "silent"),
];

/// Pairs the affix-trimmed frequency heuristic must handle without panicking.
pub const FREQUENCY_TRIMMED_NO_CRASH: &[(&str, &str)] = &[
    ("", ""),
    ("abc", "abc"),
    ("abcd", "abce"),
    ("abca", "abca"),
    ("bcde", "bcde"),
    ("bcde", "abcde"),
    ("abcde", "abcd"),
    ("abcd", "abcde"),
    ("abcdef", "bcde"),
    ("bcde", "abcdef"),
    ("abcdef", "cdeb"),
    ("abbc", "bbc"),
    ("bbc", "abbc"),
    ("banana", "bandana"),
    ("bandana", "banana"),
    ("testing", "taste"),
    ("taste", "testing"),
];
