// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Morisita's overlap index and Horn's modification.
//!
//! Both compare the two byte histograms as abundance distributions:
//!
//! ```text
//! C = 2 Σ x_c·y_c / ((D_x + D_y) · X · Y)
//! ```
//!
//! Morisita uses the unbiased Simpson dispersion `D_x = Σ x_c(x_c−1) / X(X−1)`,
//! Horn the plug-in one `D_x = Σ x_c² / X²`. Horn's index is 1 for identical
//! histograms; Morisita's can exceed 1 on small samples.

use crate::freq::FrequencyTable;
use crate::seq::ByteSeq;

struct Moments {
    cross: f64,
    x_total: f64,
    y_total: f64,
    x_squares: f64,
    y_squares: f64,
}

fn moments<A, B>(a: &A, b: &B) -> Moments
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let fa = FrequencyTable::new(a);
    let fb = FrequencyTable::new(b);
    let mut m = Moments {
        cross: 0.0,
        x_total: a.len() as f64,
        y_total: b.len() as f64,
        x_squares: 0.0,
        y_squares: 0.0,
    };
    for (&x, &y) in fa.counts().iter().zip(fb.counts()) {
        let (x, y) = (f64::from(x), f64::from(y));
        m.cross += x * y;
        m.x_squares += x * x;
        m.y_squares += y * y;
    }
    m
}

/// Morisita's overlap index, or `None` when an input has fewer than 2
/// elements or neither input repeats any element (zero dispersion).
pub fn checked_morisita_overlap<A, B>(a: &A, b: &B) -> Option<f64>
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    if a.len() < 2 || b.len() < 2 {
        return None;
    }
    let m = moments(a, b);
    // Σ x(x−1) = Σ x² − X
    let dx = (m.x_squares - m.x_total) / (m.x_total * (m.x_total - 1.0));
    let dy = (m.y_squares - m.y_total) / (m.y_total * (m.y_total - 1.0));
    let denominator = (dx + dy) * (m.x_total * m.y_total);
    if denominator <= 0.0 {
        return None;
    }
    Some(2.0 * m.cross / denominator)
}

/// Morisita's overlap index.
///
/// # Panics
///
/// When an input has fewer than 2 elements, or when every element of both
/// inputs is distinct.
pub fn morisita_overlap<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    match checked_morisita_overlap(a, b) {
        Some(score) => score,
        None => panic!(
            "morisita_overlap: degenerate dispersion (|a| = {}, |b| = {})",
            a.len(),
            b.len()
        ),
    }
}

/// Horn's modified Morisita index, or `None` when either input is empty.
pub fn checked_horn_morisita_overlap<A, B>(a: &A, b: &B) -> Option<f64>
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    if a.is_empty() || b.is_empty() {
        return None;
    }
    let m = moments(a, b);
    let dx = m.x_squares / (m.x_total * m.x_total);
    let dy = m.y_squares / (m.y_total * m.y_total);
    Some(2.0 * m.cross / ((dx + dy) * (m.x_total * m.y_total)))
}

/// Horn's modified Morisita index.
///
/// # Panics
///
/// When either input is empty.
pub fn horn_morisita_overlap<A, B>(a: &A, b: &B) -> f64
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    match checked_horn_morisita_overlap(a, b) {
        Some(score) => score,
        None => panic!("horn_morisita_overlap: an input is empty"),
    }
}
