// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distances rescaled to similarities in `[0, 1]`.
//!
//! Two empty inputs are identical and score 1.0.

use crate::seq::ByteSeq;

use super::{damerau_levenshtein, lcs_length, levenshtein, osa_distance};

#[inline]
fn distance_similarity(distance: usize, la: usize, lb: usize) -> f64 {
    let longest = la.max(lb);
    if longest == 0 {
        return 1.0;
    }
    1.0 - distance as f64 / longest as f64
}

/// `1 − levenshtein / max(|a|, |b|)`.
pub fn levenshtein_similarity<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    distance_similarity(levenshtein(a, b), a.len(), b.len())
}

/// `1 − osa / max(|a|, |b|)`.
pub fn osa_similarity<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    distance_similarity(osa_distance(a, b), a.len(), b.len())
}

/// `1 − damerau_levenshtein / max(|a|, |b|)`.
pub fn damerau_levenshtein_similarity<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    distance_similarity(damerau_levenshtein(a, b), a.len(), b.len())
}

/// `lcs / min(|a|, |b|)`: 1.0 when the shorter input is a subsequence of the
/// longer one. Zero when exactly one side is empty.
pub fn lcs_similarity<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let (la, lb) = (a.len(), b.len());
    if la == 0 && lb == 0 {
        return 1.0;
    }
    let shortest = la.min(lb);
    if shortest == 0 {
        return 0.0;
    }
    lcs_length(a, b) as f64 / shortest as f64
}
