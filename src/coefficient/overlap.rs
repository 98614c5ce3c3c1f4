// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Intersection-based coefficients: Dice-Sorensen, Jaccard, Overlap, Tversky.
//!
//! Every coefficient is a ratio built from one intersection count `I` and the
//! two input lengths. The [`Grams`] flavour picks how `I` is counted; the
//! lengths are always the sequence lengths, even for bigrams.

use serde::{Deserialize, Serialize};

use crate::freq::{bigram_intersection_count, character_intersection_count};
use crate::seq::ByteSeq;

/// What counts as a shared unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Grams {
    /// Multiset of single elements: `Σ min(count_a(c), count_b(c))`.
    #[default]
    Character,
    /// Adjacent pairs of `b` that occur anywhere in `a`.
    Bigram,
}

impl Grams {
    pub fn intersection<A, B>(self, a: &A, b: &B) -> usize
    where
        A: ByteSeq + ?Sized,
        B: ByteSeq + ?Sized,
    {
        match self {
            Grams::Character => character_intersection_count(a, b),
            Grams::Bigram => bigram_intersection_count(a, b),
        }
    }
}

/// `2·I / (|a| + |b|)`, or `None` when both inputs are empty.
pub fn checked_dice_sorensen<A, B>(a: &A, b: &B, grams: Grams) -> Option<f64>
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let total = a.len() + b.len();
    if total == 0 {
        return None;
    }
    let i = grams.intersection(a, b);
    Some(2.0 * i as f64 / total as f64)
}

/// Dice-Sorensen coefficient `2·I / (|a| + |b|)`.
///
/// # Panics
///
/// When both inputs are empty.
pub fn dice_sorensen<A, B>(a: &A, b: &B, grams: Grams) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    match checked_dice_sorensen(a, b, grams) {
        Some(score) => score,
        None => panic!("dice_sorensen: both inputs are empty"),
    }
}

/// `I / (|a| + |b| − I)`, or `None` when both inputs are empty.
pub fn checked_jaccard<A, B>(a: &A, b: &B, grams: Grams) -> Option<f64>
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let i = grams.intersection(a, b);
    let union = a.len() + b.len() - i;
    if union == 0 {
        return None;
    }
    Some(i as f64 / union as f64)
}

/// Jaccard coefficient `I / (|a| + |b| − I)`.
///
/// # Panics
///
/// When both inputs are empty.
pub fn jaccard<A, B>(a: &A, b: &B, grams: Grams) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    match checked_jaccard(a, b, grams) {
        Some(score) => score,
        None => panic!("jaccard: both inputs are empty"),
    }
}

/// `I / min(|a|, |b|)`, or `None` when either input is empty.
pub fn checked_overlap_coefficient<A, B>(a: &A, b: &B, grams: Grams) -> Option<f64>
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let shortest = a.len().min(b.len());
    if shortest == 0 {
        return None;
    }
    let i = grams.intersection(a, b);
    Some(i as f64 / shortest as f64)
}

/// Overlap (Szymkiewicz-Simpson) coefficient `I / min(|a|, |b|)`.
///
/// # Panics
///
/// When either input is empty.
pub fn overlap_coefficient<A, B>(a: &A, b: &B, grams: Grams) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    match checked_overlap_coefficient(a, b, grams) {
        Some(score) => score,
        None => panic!("overlap_coefficient: an input is empty"),
    }
}

/// `I / (I + α(|a| − I) + β(|b| − I))`, or `None` when the denominator is
/// not positive.
pub fn checked_tversky<A, B>(a: &A, b: &B, alpha: f64, beta: f64, grams: Grams) -> Option<f64>
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let i = grams.intersection(a, b);
    let only_a = (a.len() - i.min(a.len())) as f64;
    let only_b = (b.len() - i.min(b.len())) as f64;
    let denominator = i as f64 + alpha * only_a + beta * only_b;
    if denominator.is_nan() || denominator <= 0.0 {
        return None;
    }
    Some(i as f64 / denominator)
}

/// Tversky index with weights `alpha` (for `a`'s leftovers) and `beta`
/// (for `b`'s). `alpha = beta = 0.5` is Dice, `alpha = beta = 1` is Jaccard.
///
/// # Panics
///
/// When the denominator is zero, e.g. both inputs empty.
pub fn tversky<A, B>(a: &A, b: &B, alpha: f64, beta: f64, grams: Grams) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    match checked_tversky(a, b, alpha, beta, grams) {
        Some(score) => score,
        None => panic!(
            "tversky: zero denominator (alpha = {}, beta = {}, |a| = {}, |b| = {})",
            alpha,
            beta,
            a.len(),
            b.len()
        ),
    }
}
