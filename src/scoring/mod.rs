// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: turn a collection and a target into a ranked prefix.
//!
//! [`Metric`] says how to compare two keys, [`Scorer`] applies it to every
//! candidate (through an optional transform), and [`Sorter`] partitions by a
//! threshold and sorts the survivors in place.

mod core;
mod metric;
pub mod ranking;

pub use self::core::Scorer;
pub use metric::{Metric, Score};
pub use ranking::{partition_by_threshold, sort_by_score, Ranked, Sorter};
