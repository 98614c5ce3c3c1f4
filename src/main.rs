// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use fuzzrank::{
    damerau_levenshtein, lcs_length, levenshtein, osa_distance, Metric, Ranked, SortConfig,
    TransformKind,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, PipelineArgs};

/// One output row for the table and for `--json`.
#[derive(Serialize)]
struct Row<'a> {
    /// 1-based position in the ranked output.
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<usize>,
    score: f64,
    candidate: &'a str,
}

/// Pair candidates with their scores; ranked rows are numbered from 1.
fn build_rows<'a>(candidates: &'a [String], scores: &[f64], ranked: bool) -> Vec<Row<'a>> {
    candidates
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(i, (candidate, &score))| Row {
            rank: ranked.then_some(i + 1),
            score,
            candidate,
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compare {
            metric,
            a,
            b,
            similarity,
        } => run_compare(&metric, &a, &b, similarity),
        Commands::Rank(args) => run_rank(&args),
        Commands::Score(args) => run_score(&args),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,fuzzrank={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_compare(metric: &str, a: &str, b: &str, similarity: bool) -> Result<()> {
    if !similarity {
        let raw = match metric {
            "levenshtein" => Some(levenshtein(a, b)),
            "osa" => Some(osa_distance(a, b)),
            "damerau-levenshtein" => Some(damerau_levenshtein(a, b)),
            "lcs" => Some(lcs_length(a, b)),
            _ => None,
        };
        if let Some(value) = raw {
            println!("{}", value);
            return Ok(());
        }
    }

    let metric: Metric = metric.parse()?;
    println!("{}", metric.score(a, b));
    Ok(())
}

/// Config file first, then any flag the caller set on top.
fn resolve_config(args: &PipelineArgs) -> Result<SortConfig> {
    let mut config = match &args.config {
        Some(path) => SortConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SortConfig::default(),
    };

    if let Some(metric) = &args.metric {
        config.metric = metric.parse()?;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if args.no_transform {
        config.transforms.clear();
    } else if !args.transforms.is_empty() {
        config.transforms = args
            .transforms
            .iter()
            .map(|name| name.parse())
            .collect::<fuzzrank::Result<Vec<TransformKind>>>()?;
    }
    config.ignore_case |= args.ignore_case;

    config.validate()?;
    tracing::debug!(
        metric = %config.metric,
        threshold = config.threshold,
        transforms = config.transforms.len(),
        ignore_case = config.ignore_case,
        "resolved sort config"
    );
    Ok(config)
}

fn read_candidates(input: Option<&Path>) -> Result<Vec<String>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read candidates from {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read candidates from stdin")?;
            text
        }
    };
    Ok(text
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

fn score_all(config: &SortConfig, candidates: &[String], target: &str) -> Vec<f64> {
    let scorer = config.scorer();
    #[cfg(feature = "parallel")]
    {
        scorer.score_parallel(candidates, target)
    }
    #[cfg(not(feature = "parallel"))]
    {
        scorer.score(candidates, target)
    }
}

fn run_rank(args: &PipelineArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let mut candidates = read_candidates(args.input.as_deref())?;
    let total = candidates.len();

    let scores = score_all(&config, &candidates, &args.target);
    let Ranked { kept, scores } = config.sorter()?.order(&mut candidates, scores);
    let shown = args.limit.map_or(kept, |limit| limit.min(kept));

    let rows = build_rows(&candidates[..shown], &scores, true);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", display::header(config.metric.name(), &args.target));
        for row in &rows {
            println!("{}", display::score_row(row.rank, row.score, row.candidate));
        }
        println!("{}", display::summary(kept, total, shown));
    }
    Ok(())
}

fn run_score(args: &PipelineArgs) -> Result<()> {
    let config = resolve_config(args)?;
    let candidates = read_candidates(args.input.as_deref())?;
    let scores = score_all(&config, &candidates, &args.target);
    let shown = args.limit.map_or(candidates.len(), |limit| limit.min(candidates.len()));

    let rows = build_rows(&candidates[..shown], &scores, false);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", display::header(config.metric.name(), &args.target));
        for row in &rows {
            println!("{}", display::score_row(None, row.score, row.candidate));
        }
    }
    Ok(())
}
