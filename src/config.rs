// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sort configuration, loadable from JSON.
//!
//! ```json
//! {
//!   "metric": { "kind": "jaro-winkler", "prefix": { "scaling": 0.1, "limit": 4 } },
//!   "threshold": 0.8,
//!   "transforms": ["strip-diacritics", "lowercase"]
//! }
//! ```
//!
//! Every field is optional; missing fields take the [`SortConfig::default`]
//! values, which match `Sorter::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::{Metric, Scorer, Sorter};
use crate::transform::{Pipeline, TransformKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub metric: Metric,
    /// Minimum score to keep; 0 disables filtering.
    pub threshold: f64,
    /// Applied in order to the target and to every candidate key.
    pub transforms: Vec<TransformKind>,
    pub ignore_case: bool,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            metric: Metric::FrequencySimilarity,
            threshold: 0.0,
            transforms: vec![TransformKind::Lowercase],
            ignore_case: false,
        }
    }
}

impl SortConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: SortConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), metric = %config.metric, "loaded sort config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        self.metric.validate()
    }

    pub fn scorer(&self) -> Scorer {
        let transform = if self.transforms.is_empty() {
            None
        } else {
            Some(Pipeline(self.transforms.clone()))
        };
        Scorer {
            metric: self.metric.clone(),
            transform,
            ignore_case: self.ignore_case,
        }
    }

    /// Validated sorter for this configuration.
    pub fn sorter(&self) -> Result<Sorter> {
        self.validate()?;
        Ok(Sorter::new(self.scorer(), self.threshold))
    }
}
