// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Metric configuration: which similarity to compute, with its parameters bound.
//!
//! [`Metric`] is plain data. It serializes to JSON, parses from a short name,
//! and evaluates over any two [`ByteSeq`]s without capturing anything.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::coefficient::{
    affix_weighted, checked_dice_sorensen, checked_horn_morisita_overlap, checked_jaccard,
    checked_morisita_overlap, checked_overlap_coefficient, checked_tversky, frequency_similarity,
    frequency_similarity_trimmed, jaro, jaro_winkler, jaro_winkler_bidirectional, AffixWeight,
    Grams,
};
use crate::error::{Error, Result};
use crate::fuzzy::{
    damerau_levenshtein_similarity, lcs_similarity, levenshtein_similarity, osa_similarity,
};
use crate::seq::{ByteSeq, Lowercased};

/// Anything that can score a candidate key against a target.
///
/// Implemented for [`Metric`] and for plain closures, so callers can plug in
/// their own similarity:
///
/// ```
/// use fuzzrank::{Score, Scorer};
///
/// let by_length = |a: &[u8], b: &[u8]| -(a.len() as f64 - b.len() as f64).abs();
/// let scorer = Scorer::<_, fuzzrank::Pipeline>::new(by_length);
/// assert_eq!(scorer.score(&["ab", "abcd"][..], "abc"), vec![-1.0, -1.0]);
/// ```
pub trait Score {
    fn score(&self, a: &[u8], b: &[u8]) -> f64;

    /// Score with ASCII case ignored. The default lowercases into temporary
    /// buffers; [`Metric`] reads through a folding view instead.
    fn score_ignore_case(&self, a: &[u8], b: &[u8]) -> f64 {
        self.score(&a.to_ascii_lowercase(), &b.to_ascii_lowercase())
    }
}

impl<F> Score for F
where
    F: Fn(&[u8], &[u8]) -> f64,
{
    fn score(&self, a: &[u8], b: &[u8]) -> f64 {
        self(a, b)
    }
}

/// A similarity metric with its parameters. Higher scores mean more similar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Metric {
    /// `1 − frequency_distance`. The default.
    #[default]
    FrequencySimilarity,
    FrequencySimilarityTrimmed,
    DiceSorensen {
        #[serde(default)]
        grams: Grams,
    },
    Jaccard {
        #[serde(default)]
        grams: Grams,
    },
    Overlap {
        #[serde(default)]
        grams: Grams,
    },
    Tversky {
        alpha: f64,
        beta: f64,
        #[serde(default)]
        grams: Grams,
    },
    Morisita,
    HornMorisita,
    Jaro,
    JaroWinkler {
        #[serde(default)]
        prefix: AffixWeight,
    },
    JaroWinklerBidirectional {
        #[serde(default)]
        prefix: AffixWeight,
        #[serde(default)]
        suffix: AffixWeight,
    },
    LevenshteinSimilarity,
    OsaSimilarity,
    DamerauLevenshteinSimilarity,
    LcsSimilarity,
    AffixWeighted {
        inner: Box<Metric>,
        #[serde(default)]
        prefix: Option<AffixWeight>,
        #[serde(default)]
        suffix: Option<AffixWeight>,
    },
}

/// Set coefficients are undefined on some inputs (both empty, no dispersion).
/// Inside the pipeline those score 1.0 for identical inputs and 0.0 otherwise.
fn degenerate<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let identical = a.len() == b.len() && (0..a.len()).all(|i| a.at(i) == b.at(i));
    if identical {
        1.0
    } else {
        0.0
    }
}

impl Metric {
    /// Names accepted by [`Metric::from_str`], each mapping to default parameters.
    pub const NAMES: &'static [&'static str] = &[
        "frequency",
        "frequency-trimmed",
        "dice",
        "dice-bigram",
        "jaccard",
        "jaccard-bigram",
        "overlap",
        "overlap-bigram",
        "tversky",
        "tversky-bigram",
        "morisita",
        "horn-morisita",
        "jaro",
        "jaro-winkler",
        "jaro-winkler-bidirectional",
        "levenshtein",
        "osa",
        "damerau-levenshtein",
        "lcs",
    ];

    /// Evaluate the metric. Never panics for a metric that passes
    /// [`Metric::validate`].
    pub fn score<A, B>(&self, a: &A, b: &B) -> f64
    where
        A: ByteSeq + ?Sized,
        B: ByteSeq + ?Sized,
    {
        match self {
            Metric::FrequencySimilarity => frequency_similarity(a, b),
            Metric::FrequencySimilarityTrimmed => frequency_similarity_trimmed(a, b),
            Metric::DiceSorensen { grams } => {
                checked_dice_sorensen(a, b, *grams).unwrap_or_else(|| degenerate(a, b))
            }
            Metric::Jaccard { grams } => {
                checked_jaccard(a, b, *grams).unwrap_or_else(|| degenerate(a, b))
            }
            Metric::Overlap { grams } => {
                checked_overlap_coefficient(a, b, *grams).unwrap_or_else(|| degenerate(a, b))
            }
            Metric::Tversky { alpha, beta, grams } => {
                checked_tversky(a, b, *alpha, *beta, *grams).unwrap_or_else(|| degenerate(a, b))
            }
            Metric::Morisita => checked_morisita_overlap(a, b).unwrap_or_else(|| degenerate(a, b)),
            Metric::HornMorisita => {
                checked_horn_morisita_overlap(a, b).unwrap_or_else(|| degenerate(a, b))
            }
            Metric::Jaro => jaro(a, b),
            Metric::JaroWinkler { prefix } => jaro_winkler(a, b, prefix),
            Metric::JaroWinklerBidirectional { prefix, suffix } => {
                jaro_winkler_bidirectional(a, b, prefix, suffix)
            }
            Metric::LevenshteinSimilarity => levenshtein_similarity(a, b),
            Metric::OsaSimilarity => osa_similarity(a, b),
            Metric::DamerauLevenshteinSimilarity => damerau_levenshtein_similarity(a, b),
            Metric::LcsSimilarity => lcs_similarity(a, b),
            Metric::AffixWeighted {
                inner,
                prefix,
                suffix,
            } => affix_weighted(a, b, prefix.as_ref(), suffix.as_ref(), |x, y| {
                // Erase the window types so nested wrappers do not nest generics.
                let (x, y): (&dyn ByteSeq, &dyn ByteSeq) = (&x, &y);
                inner.score(x, y)
            }),
        }
    }

    /// Check parameter ranges: affix scalings in `[-1, 1]`, Tversky weights
    /// finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        match self {
            Metric::Tversky { alpha, beta, .. } => {
                let ok = |w: f64| w.is_finite() && w >= 0.0;
                if ok(*alpha) && ok(*beta) {
                    Ok(())
                } else {
                    Err(Error::NegativeTverskyWeight {
                        alpha: *alpha,
                        beta: *beta,
                    })
                }
            }
            Metric::JaroWinkler { prefix } => prefix.validate(),
            Metric::JaroWinklerBidirectional { prefix, suffix } => {
                prefix.validate()?;
                suffix.validate()
            }
            Metric::AffixWeighted {
                inner,
                prefix,
                suffix,
            } => {
                if let Some(w) = prefix {
                    w.validate()?;
                }
                if let Some(w) = suffix {
                    w.validate()?;
                }
                inner.validate()
            }
            _ => Ok(()),
        }
    }

    /// Short name of the metric family.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::FrequencySimilarity => "frequency",
            Metric::FrequencySimilarityTrimmed => "frequency-trimmed",
            Metric::DiceSorensen { .. } => "dice",
            Metric::Jaccard { .. } => "jaccard",
            Metric::Overlap { .. } => "overlap",
            Metric::Tversky { .. } => "tversky",
            Metric::Morisita => "morisita",
            Metric::HornMorisita => "horn-morisita",
            Metric::Jaro => "jaro",
            Metric::JaroWinkler { .. } => "jaro-winkler",
            Metric::JaroWinklerBidirectional { .. } => "jaro-winkler-bidirectional",
            Metric::LevenshteinSimilarity => "levenshtein",
            Metric::OsaSimilarity => "osa",
            Metric::DamerauLevenshteinSimilarity => "damerau-levenshtein",
            Metric::LcsSimilarity => "lcs",
            Metric::AffixWeighted { .. } => "affix-weighted",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Parse a metric name (see [`Metric::NAMES`]) or a JSON object such as
    /// `{"kind": "tversky", "alpha": 1.0, "beta": 0.5}`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('{') {
            let metric: Metric = serde_json::from_str(s)?;
            metric.validate()?;
            return Ok(metric);
        }
        let metric = match s.to_ascii_lowercase().as_str() {
            "frequency" | "frequency-similarity" => Metric::FrequencySimilarity,
            "frequency-trimmed" => Metric::FrequencySimilarityTrimmed,
            "dice" | "dice-sorensen" => Metric::DiceSorensen {
                grams: Grams::Character,
            },
            "dice-bigram" => Metric::DiceSorensen {
                grams: Grams::Bigram,
            },
            "jaccard" => Metric::Jaccard {
                grams: Grams::Character,
            },
            "jaccard-bigram" => Metric::Jaccard {
                grams: Grams::Bigram,
            },
            "overlap" => Metric::Overlap {
                grams: Grams::Character,
            },
            "overlap-bigram" => Metric::Overlap {
                grams: Grams::Bigram,
            },
            "tversky" => Metric::Tversky {
                alpha: 0.5,
                beta: 0.5,
                grams: Grams::Character,
            },
            "tversky-bigram" => Metric::Tversky {
                alpha: 0.5,
                beta: 0.5,
                grams: Grams::Bigram,
            },
            "morisita" => Metric::Morisita,
            "horn-morisita" => Metric::HornMorisita,
            "jaro" => Metric::Jaro,
            "jaro-winkler" => Metric::JaroWinkler {
                prefix: AffixWeight::WINKLER,
            },
            "jaro-winkler-bidirectional" => Metric::JaroWinklerBidirectional {
                prefix: AffixWeight::WINKLER,
                suffix: AffixWeight::WINKLER,
            },
            "levenshtein" => Metric::LevenshteinSimilarity,
            "osa" => Metric::OsaSimilarity,
            "damerau-levenshtein" | "damerau" => Metric::DamerauLevenshteinSimilarity,
            "lcs" => Metric::LcsSimilarity,
            _ => return Err(Error::UnknownMetric(s.to_string())),
        };
        Ok(metric)
    }
}

impl Score for Metric {
    fn score(&self, a: &[u8], b: &[u8]) -> f64 {
        Metric::score(self, a, b)
    }

    fn score_ignore_case(&self, a: &[u8], b: &[u8]) -> f64 {
        Metric::score(self, &Lowercased(a), &Lowercased(b))
    }
}
