// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Library error type.
//!
//! Metric functions never return errors: a bad parameter passed straight to a
//! raw function is a caller bug and panics. Errors come from the validated
//! constructors and from loading configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("scaling factor {0} is outside [-1, 1]")]
    ScalingOutOfRange(f64),

    #[error("tversky weights must be non-negative and finite (alpha = {alpha}, beta = {beta})")]
    NegativeTverskyWeight { alpha: f64, beta: f64 },

    #[error("unknown metric '{0}'")]
    UnknownMetric(String),

    #[error("unknown transform '{0}'")]
    UnknownTransform(String),

    #[error("threshold {0} is not a finite number")]
    InvalidThreshold(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
