// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pre-transforms: rewrite a sequence before it is scored.
//!
//! A transform never mutates its input. When nothing would change it hands the
//! input back as `Cow::Borrowed`, so the common all-ASCII lowercase case costs
//! one scan and no allocation.
//!
//! Transforms can fail (Unicode normalization needs valid UTF-8). The pipeline
//! treats a failure as "use the raw input for this element" and logs it at
//! debug level; see [`apply_or_raw`].

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, is_nfkd, UnicodeNormalization};

use crate::error::Error;

/// Why a transform could not rewrite its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },

    #[error("transform '{0}' needs the unicode-normalization feature")]
    Unsupported(&'static str),
}

pub trait Transform {
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError>;
}

impl<T: Transform + ?Sized> Transform for &T {
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        (**self).apply(input)
    }
}

impl<T: Transform + ?Sized> Transform for Box<T> {
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        (**self).apply(input)
    }
}

/// Apply `transform`, falling back to the untouched input if it fails.
pub fn apply_or_raw<'a, T: Transform + ?Sized>(transform: &T, input: &'a [u8]) -> Cow<'a, [u8]> {
    match transform.apply(input) {
        Ok(out) => out,
        Err(err) => {
            tracing::debug!(error = %err, len = input.len(), "transform failed, using raw input");
            Cow::Borrowed(input)
        }
    }
}

/// Run `transform` on an owned buffer, keeping the buffer when nothing changes.
fn apply_owned<T: Transform + ?Sized>(
    transform: &T,
    input: Vec<u8>,
) -> Result<Vec<u8>, TransformError> {
    let changed = match transform.apply(&input)? {
        Cow::Owned(out) => Some(out),
        Cow::Borrowed(_) => None,
    };
    Ok(changed.unwrap_or(input))
}

/// ASCII case folding. Bytes outside `A..=Z` pass through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercase;

impl Transform for Lowercase {
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        if input.iter().any(u8::is_ascii_uppercase) {
            Ok(Cow::Owned(input.to_ascii_lowercase()))
        } else {
            Ok(Cow::Borrowed(input))
        }
    }
}

/// Drops every byte `>= 128`, i.e. every non-ASCII character of UTF-8 text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsciiFilter;

impl Transform for AsciiFilter {
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        if input.is_ascii() {
            Ok(Cow::Borrowed(input))
        } else {
            Ok(Cow::Owned(input.iter().copied().filter(u8::is_ascii).collect()))
        }
    }
}

#[cfg(feature = "unicode-normalization")]
fn as_utf8(input: &[u8]) -> Result<&str, TransformError> {
    std::str::from_utf8(input).map_err(|e| TransformError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}

/// Unicode compatibility decomposition (NFKD): `ﬁ` → `fi`, `é` → `e` + U+0301.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeNormalize;

impl Transform for UnicodeNormalize {
    #[cfg(feature = "unicode-normalization")]
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        let text = as_utf8(input)?;
        if is_nfkd(text) {
            return Ok(Cow::Borrowed(input));
        }
        Ok(Cow::Owned(text.nfkd().collect::<String>().into_bytes()))
    }

    #[cfg(not(feature = "unicode-normalization"))]
    fn apply<'a>(&self, _input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        Err(TransformError::Unsupported("unicode-normalize"))
    }
}

/// Canonical decomposition with combining marks removed: "café" → "cafe".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripDiacritics;

impl Transform for StripDiacritics {
    #[cfg(feature = "unicode-normalization")]
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        let text = as_utf8(input)?;
        if text.is_ascii() {
            return Ok(Cow::Borrowed(input));
        }
        let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
        if stripped == text {
            Ok(Cow::Borrowed(input))
        } else {
            Ok(Cow::Owned(stripped.into_bytes()))
        }
    }

    #[cfg(not(feature = "unicode-normalization"))]
    fn apply<'a>(&self, _input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        Err(TransformError::Unsupported("strip-diacritics"))
    }
}

/// `A` then `B`. Either failing fails the chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Chain<A, B>(pub A, pub B);

impl<A: Transform, B: Transform> Transform for Chain<A, B> {
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        match self.0.apply(input)? {
            Cow::Borrowed(first) => self.1.apply(first),
            Cow::Owned(first) => apply_owned(&self.1, first).map(Cow::Owned),
        }
    }
}

/// A transform chosen by name, for configuration files and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformKind {
    Lowercase,
    UnicodeNormalize,
    StripDiacritics,
    AsciiFilter,
}

impl TransformKind {
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Lowercase,
        TransformKind::UnicodeNormalize,
        TransformKind::StripDiacritics,
        TransformKind::AsciiFilter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Lowercase => "lowercase",
            TransformKind::UnicodeNormalize => "unicode-normalize",
            TransformKind::StripDiacritics => "strip-diacritics",
            TransformKind::AsciiFilter => "ascii-filter",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowercase" | "lower" => Ok(TransformKind::Lowercase),
            "unicode-normalize" | "nfkd" => Ok(TransformKind::UnicodeNormalize),
            "strip-diacritics" | "unaccent" => Ok(TransformKind::StripDiacritics),
            "ascii-filter" | "ascii" => Ok(TransformKind::AsciiFilter),
            _ => Err(Error::UnknownTransform(s.to_string())),
        }
    }
}

impl Transform for TransformKind {
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        match self {
            TransformKind::Lowercase => Lowercase.apply(input),
            TransformKind::UnicodeNormalize => UnicodeNormalize.apply(input),
            TransformKind::StripDiacritics => StripDiacritics.apply(input),
            TransformKind::AsciiFilter => AsciiFilter.apply(input),
        }
    }
}

/// Ordered list of named transforms. An empty pipeline is the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pipeline(pub Vec<TransformKind>);

impl Pipeline {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<TransformKind>> for Pipeline {
    fn from(steps: Vec<TransformKind>) -> Self {
        Self(steps)
    }
}

impl FromIterator<TransformKind> for Pipeline {
    fn from_iter<I: IntoIterator<Item = TransformKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Transform for Pipeline {
    fn apply<'a>(&self, input: &'a [u8]) -> Result<Cow<'a, [u8]>, TransformError> {
        let mut current = Cow::Borrowed(input);
        for step in &self.0 {
            current = match current {
                Cow::Borrowed(bytes) => step.apply(bytes)?,
                Cow::Owned(bytes) => Cow::Owned(apply_owned(step, bytes)?),
            };
        }
        Ok(current)
    }
}
