// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distances: how many operations turn one sequence into another.
//!
//! Four engines, from cheapest to most general:
//!
//! | Engine                | Operations                         | Working memory      |
//! |-----------------------|------------------------------------|---------------------|
//! | `lcs_length`          | match only (similarity)            | 2 rows of `min + 1` |
//! | `levenshtein`         | insert, delete, substitute         | 2 rows of `min + 1` |
//! | `osa_distance`        | + adjacent transposition, once     | 3 rows of `min + 1` |
//! | `damerau_levenshtein` | + unrestricted transposition       | `(m+2) × (n+2)`     |
//!
//! Every engine puts the longer input first before allocating, so the rows
//! scale with the shorter input and exactly one buffer is allocated whatever
//! the argument order. The row-based engines also strip the common prefix and
//! suffix first: edits inside a shared affix never help.
//!
//! OSA and Damerau-Levenshtein are different metrics. OSA forbids editing a
//! transposed pair again, so `OSA("ca", "abc") = 3` while the unrestricted
//! distance is 2. For every input, `damerau ≤ osa ≤ levenshtein`.

mod damerau;
mod lcs;
mod levenshtein;
mod osa;
mod similarity;

pub use damerau::damerau_levenshtein;
pub use lcs::lcs_length;
pub use levenshtein::levenshtein;
pub use osa::osa_distance;
pub use similarity::*;

pub(crate) use levenshtein::levenshtein_rows;
