// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Affix weighting: score a shared prefix/suffix at a fixed rate and hand only
//! the differing middle to another metric.

use crate::seq::{common_prefix_len, ByteSeq, Window};

use super::jaro::AffixWeight;

/// Blend a fixed per-element weight for the shared affix with `inner`'s score
/// on the remainder.
///
/// Up to `prefix.limit` common leading elements are trimmed, then up to
/// `suffix.limit` common trailing elements of what remains. With
/// `m = min(|a|, |b|)`, trimmed counts `p`, `s` and `r = inner(rest_a, rest_b)`:
///
/// ```text
/// score = (p·prefix.scaling + r·(m − p − s) + s·suffix.scaling) / m
/// ```
///
/// `inner` is only called when the shorter remainder is non-empty, so it never
/// sees an empty side. When `m = 0` there is nothing to trim and `inner` gets
/// the untrimmed inputs.
///
/// ```
/// use fuzzrank::{affix_weighted, levenshtein_similarity, AffixWeight};
///
/// let w = AffixWeight { scaling: 1.0, limit: None };
/// // "data" is shared; only "set" vs "base" goes through Levenshtein.
/// let score = affix_weighted("dataset", "database", Some(&w), None, |a, b| {
///     levenshtein_similarity(&a, &b)
/// });
/// assert!(score > levenshtein_similarity("dataset", "database"));
/// ```
///
/// # Panics
///
/// When a scaling is outside `[-1, 1]`.
pub fn affix_weighted<'a, A, B, F>(
    a: &'a A,
    b: &'a B,
    prefix: Option<&AffixWeight>,
    suffix: Option<&AffixWeight>,
    inner: F,
) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
    F: FnOnce(Window<'a, A>, Window<'a, B>) -> f64,
{
    if let Some(w) = prefix {
        w.assert_valid("affix_weighted prefix");
    }
    if let Some(w) = suffix {
        w.assert_valid("affix_weighted suffix");
    }

    let (la, lb) = (a.len(), b.len());
    let m = la.min(lb);
    if m == 0 {
        return inner(Window::full(a), Window::full(b));
    }

    let p = prefix.map_or(0, |w| w.cap(common_prefix_len(a, b)));
    let s = suffix.map_or(0, |w| {
        let room = w.cap(m - p);
        let mut s = 0;
        while s < room && a.at(la - 1 - s) == b.at(lb - 1 - s) {
            s += 1;
        }
        s
    });

    let rest = m - p - s;
    let middle = if rest == 0 {
        0.0
    } else {
        let r = inner(
            Window::new(a, p, la - p - s),
            Window::new(b, p, lb - p - s),
        );
        r * rest as f64
    };

    let prefix_part = prefix.map_or(0.0, |w| p as f64 * w.scaling);
    let suffix_part = suffix.map_or(0.0, |w| s as f64 * w.scaling);
    (prefix_part + middle + suffix_part) / m as f64
}
