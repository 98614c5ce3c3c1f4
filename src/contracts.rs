// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the metric engines and the ranking phases.
//!
//! These are debug-mode assertions (`debug_assert!`): free in release builds,
//! loud during development and under the test suites.
//!
//! | Contract                   | Property                                        |
//! |----------------------------|-------------------------------------------------|
//! | `check_distance_bounds`    | `||a| − |b|| ≤ d ≤ max(|a|, |b|)`               |
//! | `check_unit_interval`      | normalized scores stay in `[0, 1]`              |
//! | `check_partitioned`        | `[0, kept)` passes the threshold, the rest fails |
//! | `check_sorted_descending`  | no score is above its predecessor               |

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

/// Winkler's default boost can never push a score past 1:
/// `jaro + p·s·(1 − jaro) ≤ 1` whenever `p·s ≤ 1`.
const _: () = {
    let w = crate::coefficient::AffixWeight::WINKLER;
    let limit = match w.limit {
        Some(limit) => limit,
        None => 0,
    };
    assert!(w.scaling * limit as f64 <= 1.0);
};

// ============================================================================
// METRIC CONTRACTS
// ============================================================================

/// An edit distance is at least the length difference and at most the longer
/// length.
#[inline]
pub fn check_distance_bounds(what: &str, distance: usize, la: usize, lb: usize) {
    debug_assert!(
        distance >= la.abs_diff(lb) && distance <= la.max(lb),
        "Contract violation: {} = {} outside [{}, {}] for lengths {} and {}",
        what,
        distance,
        la.abs_diff(lb),
        la.max(lb),
        la,
        lb
    );
}

/// A normalized score lies in `[0, 1]` (with a little float slack).
#[inline]
pub fn check_unit_interval(what: &str, value: f64) {
    debug_assert!(
        (-1e-12..=1.0 + 1e-12).contains(&value),
        "Contract violation: {} = {} outside [0, 1]",
        what,
        value
    );
}

// ============================================================================
// RANKING CONTRACTS
// ============================================================================

/// After partitioning, every kept score passes and every other one does not.
#[inline]
pub fn check_partitioned(scores: &[f64], kept: usize, threshold: f64) {
    debug_assert!(
        kept <= scores.len(),
        "Contract violation: kept {} > len {}",
        kept,
        scores.len()
    );
    for (i, &s) in scores.iter().enumerate() {
        let passes = s >= threshold;
        debug_assert!(
            passes == (i < kept),
            "Contract violation: scores[{}] = {} on the wrong side of threshold {} (kept = {})",
            i,
            s,
            threshold,
            kept
        );
    }
}

/// Scores are non-increasing, with any NaN only at the end.
#[inline]
pub fn check_sorted_descending(scores: &[f64]) {
    for i in 1..scores.len() {
        let (prev, curr) = (scores[i - 1], scores[i]);
        debug_assert!(
            curr.is_nan() || prev >= curr,
            "Contract violation: scores[{}] = {} > scores[{}] = {}",
            i,
            curr,
            i - 1,
            prev
        );
    }
}
