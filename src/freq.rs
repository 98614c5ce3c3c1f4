// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-size frequency tables and bigram bitsets.
//!
//! The alphabet is 256 byte values, so a full histogram is 256 counters and the
//! set of all possible bigrams fits in 65536 bits (8 KiB). Both are built in one
//! linear pass, live on the stack, and are thrown away at the end of the call.
//!
//! The bigram set records presence, not multiplicity. A bigram that appears
//! twice in `a` is stored once; every occurrence in `b` is then checked against
//! that set.

use crate::seq::ByteSeq;

/// Occurrence count of every byte value in one sequence.
#[derive(Clone)]
pub struct FrequencyTable {
    counts: [u32; 256],
}

impl FrequencyTable {
    pub fn new<S: ByteSeq + ?Sized>(seq: &S) -> Self {
        let mut counts = [0u32; 256];
        for i in 0..seq.len() {
            counts[seq.at(i) as usize] += 1;
        }
        Self { counts }
    }

    #[inline]
    pub fn count(&self, byte: u8) -> u32 {
        self.counts[byte as usize]
    }

    /// All 256 counters, indexed by byte value.
    pub fn counts(&self) -> &[u32; 256] {
        &self.counts
    }
}

/// Presence bitset over all 65536 ordered byte pairs.
#[derive(Clone)]
pub struct BigramSet {
    bits: [u64; 1024],
}

impl BigramSet {
    /// Mark every adjacent pair of `seq`. Sequences shorter than 2 give an empty set.
    pub fn new<S: ByteSeq + ?Sized>(seq: &S) -> Self {
        let mut bits = [0u64; 1024];
        for i in 1..seq.len() {
            let bigram = Self::key(seq.at(i - 1), seq.at(i));
            bits[bigram >> 6] |= 1 << (bigram & 63);
        }
        Self { bits }
    }

    #[inline]
    pub fn contains(&self, first: u8, second: u8) -> bool {
        let bigram = Self::key(first, second);
        self.bits[bigram >> 6] & (1 << (bigram & 63)) != 0
    }

    #[inline]
    fn key(first: u8, second: u8) -> usize {
        (first as usize) << 8 | second as usize
    }
}

/// Multiset intersection size: `Σ min(count_a(c), count_b(c))`.
///
/// Builds `a`'s histogram, then consumes one unit per matching element of `b`.
///
/// Time O(|a| + |b|), space 256 counters.
pub fn character_intersection_count<A, B>(a: &A, b: &B) -> usize
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let mut remaining = FrequencyTable::new(a).counts;
    let mut intersection = 0;
    for i in 0..b.len() {
        let bin = &mut remaining[b.at(i) as usize];
        if *bin > 0 {
            *bin -= 1;
            intersection += 1;
        }
    }
    intersection
}

/// Number of adjacent pairs of `b` that also occur somewhere in `a`.
///
/// Zero when either input has fewer than 2 elements.
///
/// Time O(|a| + |b|), space 8 KiB.
pub fn bigram_intersection_count<A, B>(a: &A, b: &B) -> usize
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    if a.len() < 2 || b.len() < 2 {
        return 0;
    }
    let present = BigramSet::new(a);
    (1..b.len())
        .filter(|&i| present.contains(b.at(i - 1), b.at(i)))
        .count()
}

/// Size of the multiset symmetric difference: `Σ |count_a(c) − count_b(c)|`.
pub fn frequency_difference<A, B>(a: &A, b: &B) -> usize
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let mut balance = [0i64; 256];
    for i in 0..a.len() {
        balance[a.at(i) as usize] += 1;
    }
    for i in 0..b.len() {
        balance[b.at(i) as usize] -= 1;
    }
    balance.iter().map(|d| d.unsigned_abs() as usize).sum()
}
