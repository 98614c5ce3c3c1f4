// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the edit-distance engines.
//!
//! Every engine is checked against the full-matrix oracle (where one exists),
//! against its length bounds, and against the `dl ≤ osa ≤ levenshtein` chain.

#![no_main]

use arbitrary::Arbitrary;
use fuzzrank::testing::{naive_lcs, naive_levenshtein, naive_osa};
use fuzzrank::{damerau_levenshtein, lcs_length, levenshtein, osa_distance};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: Vec<u8>,
    b: Vec<u8>,
}

fuzz_target!(|input: PairInput| {
    // The oracles are quadratic in memory.
    let a = &input.a[..input.a.len().min(64)];
    let b = &input.b[..input.b.len().min(64)];

    let lev = levenshtein(a, b);
    let osa = osa_distance(a, b);
    let dl = damerau_levenshtein(a, b);
    let lcs = lcs_length(a, b);

    assert_eq!(lev, naive_levenshtein(a, b));
    assert_eq!(osa, naive_osa(a, b));
    assert_eq!(lcs, naive_lcs(a, b));

    assert!(dl <= osa && osa <= lev, "dl {} osa {} lev {}", dl, osa, lev);
    assert!(a.len().abs_diff(b.len()) <= dl);
    assert!(lev <= a.len().max(b.len()));
    assert!(lcs <= a.len().min(b.len()));

    assert_eq!(dl, damerau_levenshtein(b, a));
});
