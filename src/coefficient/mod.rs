// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Similarity coefficients in (mostly) `[0, 1]`.
//!
//! Two families live here:
//!
//! - **Set overlap** ([`dice_sorensen`], [`jaccard`], [`overlap_coefficient`],
//!   [`tversky`], the Morisita indices): built from one intersection count or
//!   one pair of frequency tables, O(|a| + |b|) with fixed-size scratch space.
//! - **Alignment-flavoured** ([`jaro`], [`jaro_winkler`], the frequency-distance
//!   heuristic, the affix-weighted wrapper): reward elements that appear in
//!   roughly the same place.
//!
//! Set coefficients have degenerate inputs where the denominator is zero.
//! The plain functions treat those as caller bugs and panic with the
//! coefficient's name; the `checked_*` variants return `None` instead.

pub mod affix;
pub mod frequency;
pub mod jaro;
mod morisita;
mod overlap;

pub use affix::affix_weighted;
pub use frequency::{
    frequency_distance, frequency_distance_trimmed, frequency_similarity,
    frequency_similarity_trimmed,
};
pub use jaro::{jaro, jaro_winkler, jaro_winkler_bidirectional, AffixWeight};
pub use morisita::{
    checked_horn_morisita_overlap, checked_morisita_overlap, horn_morisita_overlap,
    morisita_overlap,
};
pub use overlap::{
    checked_dice_sorensen, checked_jaccard, checked_overlap_coefficient, checked_tversky,
    dice_sorensen, jaccard, overlap_coefficient, tversky, Grams,
};
