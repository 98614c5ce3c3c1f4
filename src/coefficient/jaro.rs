// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Jaro similarity and the Winkler family of affix boosts.
//!
//! Jaro counts elements that match within a sliding window, then penalizes
//! matches that appear in a different order:
//!
//! ```text
//! jaro = (m/|a| + m/|b| + (m − t)/m) / 3
//! ```
//!
//! Winkler's observation is that typos cluster away from the start of a word,
//! so a shared prefix should pull the score towards 1. The bidirectional
//! variant applies the same boost to a shared suffix.

use serde::{Deserialize, Serialize};

use crate::contracts::check_unit_interval;
use crate::error::{Error, Result};
use crate::seq::ByteSeq;

/// Weight given to each element of a shared prefix or suffix.
///
/// `limit` caps how many elements count; `None` counts the whole shared run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffixWeight {
    pub scaling: f64,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl AffixWeight {
    /// Winkler's original parameters: 0.1 per element, at most 4 elements.
    pub const WINKLER: AffixWeight = AffixWeight {
        scaling: 0.1,
        limit: Some(4),
    };

    /// Validated constructor: `scaling` must lie in `[-1, 1]`.
    pub fn new(scaling: f64, limit: Option<usize>) -> Result<Self> {
        let weight = Self { scaling, limit };
        weight.validate()?;
        Ok(weight)
    }

    pub fn validate(&self) -> Result<()> {
        if (-1.0..=1.0).contains(&self.scaling) {
            Ok(())
        } else {
            Err(Error::ScalingOutOfRange(self.scaling))
        }
    }

    pub(crate) fn assert_valid(&self, what: &str) {
        assert!(
            (-1.0..=1.0).contains(&self.scaling),
            "{}: scaling {} is outside [-1, 1]",
            what,
            self.scaling
        );
    }

    #[inline]
    pub(crate) fn cap(&self, run: usize) -> usize {
        self.limit.map_or(run, |limit| run.min(limit))
    }
}

impl Default for AffixWeight {
    fn default() -> Self {
        Self::WINKLER
    }
}

/// Jaro similarity in `[0, 1]`.
///
/// Both empty gives 1, exactly one empty gives 0. The match window is
/// `max(|a|, |b|) / 2 − 1`, floored at 0 so single-element inputs still match
/// themselves.
///
/// ```
/// use fuzzrank::jaro;
///
/// assert!((jaro("MARTHA", "MARHTA") - 0.9444444444444445).abs() < 1e-13);
/// ```
pub fn jaro<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    if a.len() >= b.len() {
        jaro_inner(a, b)
    } else {
        jaro_inner(b, a)
    }
}

fn jaro_inner<L, S>(long: &L, short: &S) -> f64
where
    L: ByteSeq + ?Sized,
    S: ByteSeq + ?Sized,
{
    let (la, lb) = (long.len(), short.len());
    if la == 0 {
        return 1.0;
    }
    if lb == 0 {
        return 0.0;
    }

    let window = (la / 2).saturating_sub(1);
    let mut flags = vec![false; la + lb];
    let (long_matched, short_matched) = flags.split_at_mut(la);

    let mut matches = 0usize;
    for i in 0..la {
        let ai = long.at(i);
        let end = (i + window + 1).min(lb);
        for j in i.saturating_sub(window)..end {
            if !short_matched[j] && short.at(j) == ai {
                long_matched[i] = true;
                short_matched[j] = true;
                matches += 1;
                break;
            }
        }
    }
    if matches == 0 {
        return 0.0;
    }

    // Walk both matched subsequences in order and count disagreements.
    let mut out_of_order = 0usize;
    let mut k = 0;
    for i in 0..la {
        if !long_matched[i] {
            continue;
        }
        while !short_matched[k] {
            k += 1;
        }
        if long.at(i) != short.at(k) {
            out_of_order += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    // Half the disagreements, rounded down.
    let t = (out_of_order / 2) as f64;
    let similarity = (m / la as f64 + m / lb as f64 + (m - t) / m) / 3.0;
    check_unit_interval("jaro", similarity);
    similarity
}

/// Length of the shared leading run, then of the shared trailing run of what
/// remains, each capped by its weight's limit.
fn affix_runs<A, B>(
    a: &A,
    b: &B,
    prefix: &AffixWeight,
    suffix: Option<&AffixWeight>,
) -> (usize, usize)
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let (la, lb) = (a.len(), b.len());
    let shortest = la.min(lb);

    let mut p = 0;
    while p < shortest && Some(p) != prefix.limit && a.at(p) == b.at(p) {
        p += 1;
    }

    let Some(suffix) = suffix else {
        return (p, 0);
    };
    let mut s = 0;
    while s < shortest - p && Some(s) != suffix.limit && a.at(la - 1 - s) == b.at(lb - 1 - s) {
        s += 1;
    }
    (p, s)
}

/// `jaro + p·scaling·(1 − jaro)`, with `p` the shared prefix length up to
/// `prefix.limit`.
///
/// With an unbounded limit and a large scaling the result can exceed 1.
///
/// # Panics
///
/// When `prefix.scaling` is outside `[-1, 1]`.
pub fn jaro_winkler<A, B>(a: &A, b: &B, prefix: &AffixWeight) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    prefix.assert_valid("jaro_winkler prefix");
    let j = jaro(a, b);
    let (p, _) = affix_runs(a, b, prefix, None);
    j + p as f64 * prefix.scaling * (1.0 - j)
}

/// Jaro-Winkler boosted from both ends:
/// `jaro + p·prefix.scaling·(1 − jaro) + s·suffix.scaling·(1 − jaro)`.
///
/// The suffix run is measured on what remains after the prefix, so the two
/// never count the same element.
///
/// # Panics
///
/// When either scaling is outside `[-1, 1]`.
pub fn jaro_winkler_bidirectional<A, B>(
    a: &A,
    b: &B,
    prefix: &AffixWeight,
    suffix: &AffixWeight,
) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    prefix.assert_valid("jaro_winkler_bidirectional prefix");
    suffix.assert_valid("jaro_winkler_bidirectional suffix");
    let j = jaro(a, b);
    let (p, s) = affix_runs(a, b, prefix, Some(suffix));
    let slack = 1.0 - j;
    j + p as f64 * prefix.scaling * slack + s as f64 * suffix.scaling * slack
}
