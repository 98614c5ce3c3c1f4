// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String similarity metrics and a score, filter and rank pipeline.
//!
//! Two layers:
//!
//! 1. **Metrics.** Stateless functions over any two byte sequences
//!    ([`ByteSeq`]): edit distances, set coefficients, Jaro-Winkler, a
//!    frequency-distance heuristic, and an affix-weighted wrapper that
//!    combines any of them with prefix and suffix bonuses.
//! 2. **Pipeline.** [`Sorter`] scores a caller-owned collection against a
//!    target, moves everything at or above a threshold to the front, and
//!    sorts that prefix best-first. The collection is reordered in place.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   ┌──────────┐   ┌──────────────┐
//! │  seq.rs  │──▶│ fuzzy/   │──▶│              │
//! │ (ByteSeq,│   │ (edit    │   │  scoring/    │
//! │  Window) │   │ distance)│   │  (Metric,    │
//! └──────────┘   └──────────┘   │   Scorer,    │
//!      │         ┌───────────┐  │   Sorter)    │
//!      └────────▶│coefficient│─▶│              │
//!   ┌────────┐   │ (set, jaro│  └──────────────┘
//!   │freq.rs │──▶│  freq)    │         ▲
//!   └────────┘   └───────────┘         │
//!                        transform.rs, collection.rs
//! ```
//!
//! # Usage
//!
//! ```
//! use fuzzrank::Sorter;
//!
//! let mut words = vec!["aple", "application", "orange", "banana", "appel"];
//! let sorter = Sorter {
//!     threshold: 0.6,
//!     ..Sorter::default()
//! };
//! let kept = sorter.sort(&mut words, "apple");
//! assert_eq!(&words[..kept], ["appel", "aple"]);
//! ```
//!
//! Metrics are plain functions:
//!
//! ```
//! use fuzzrank::{damerau_levenshtein, jaro_winkler, levenshtein, AffixWeight};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert_eq!(damerau_levenshtein("ca", "ac"), 1);
//! let jw = jaro_winkler("MARTHA", "MARHTA", &AffixWeight::WINKLER);
//! assert!((jw - 0.9611111111111111).abs() < 1e-12);
//! ```

pub mod coefficient;
pub mod collection;
pub mod config;
pub mod contracts;
pub mod error;
pub mod freq;
pub mod fuzzy;
pub mod scoring;
pub mod seq;
pub mod transform;

#[doc(hidden)]
pub mod testing;

pub use coefficient::*;
pub use collection::{Candidates, MultiKeyCandidates, MultiKeyRecords, Records, Reorder};
pub use config::SortConfig;
pub use error::{Error, Result};
pub use freq::{bigram_intersection_count, character_intersection_count, FrequencyTable};
pub use fuzzy::{
    damerau_levenshtein, damerau_levenshtein_similarity, lcs_length, lcs_similarity, levenshtein,
    levenshtein_similarity, osa_distance, osa_similarity,
};
pub use scoring::{partition_by_threshold, sort_by_score, Metric, Ranked, Score, Scorer, Sorter};
pub use seq::{ByteSeq, Lowercased, Window};
pub use transform::{
    AsciiFilter, Chain, Lowercase, Pipeline, StripDiacritics, Transform, TransformError,
    TransformKind, UnicodeNormalize,
};
