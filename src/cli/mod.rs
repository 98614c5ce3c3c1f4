// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the fuzzrank command-line interface.
//!
//! Three subcommands: `compare` prints one metric value for two strings,
//! `rank` filters and sorts newline-separated candidates against a target,
//! and `score` prints every candidate's score in input order.

pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fuzzrank",
    about = "Fuzzy string matching: similarity metrics and ranking",
    version
)]
pub struct Cli {
    /// Log more (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two strings with one metric
    ///
    /// Edit-distance engines (levenshtein, osa, damerau-levenshtein) print
    /// the integer distance and `lcs` prints the subsequence length, unless
    /// --similarity asks for the normalized score. Every other metric prints
    /// a float.
    Compare {
        /// Metric name, e.g. jaro-winkler, or a JSON metric object
        metric: String,

        a: String,

        b: String,

        /// Print the normalized similarity for edit-distance metrics
        #[arg(long)]
        similarity: bool,
    },

    /// Filter and sort candidates by similarity to a target
    Rank(PipelineArgs),

    /// Score candidates against a target, in input order
    Score(PipelineArgs),
}

#[derive(Args)]
pub struct PipelineArgs {
    /// String every candidate is compared against
    pub target: String,

    /// Newline-separated candidates (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// JSON sort configuration; flags override its fields
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Metric name or JSON metric object
    #[arg(short, long)]
    pub metric: Option<String>,

    /// Minimum score to keep (0 keeps everything)
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Pre-transform applied to target and candidates, repeatable, in order
    #[arg(long = "transform", value_name = "NAME")]
    pub transforms: Vec<String>,

    /// Score raw input, dropping configured transforms
    #[arg(long, conflicts_with = "transforms")]
    pub no_transform: bool,

    /// Fold ASCII case when comparing
    #[arg(long)]
    pub ignore_case: bool,

    /// Show at most this many rows
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Emit JSON instead of a table (`rank` counts from 1, as in the table)
    #[arg(long)]
    pub json: bool,
}
