// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence views: one read interface over every byte container.
//!
//! Every metric in this crate reads its inputs through [`ByteSeq`], so a `&str`
//! can be compared against a `Vec<u8>` without either side being copied. Two
//! adapters sit on top: [`Lowercased`] folds ASCII case at read time, and
//! [`Window`] is the zero-copy sub-view that affix trimming hands to the DP
//! engines.

/// An ordered, finite, immutable sequence of 8-bit code units.
///
/// Indexing is O(1) and the length is known up front. `at` panics on an
/// out-of-range index; call sites only ever index in `[0, len)`.
pub trait ByteSeq {
    fn len(&self) -> usize;

    fn at(&self, index: usize) -> u8;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ByteSeq for [u8] {
    #[inline]
    fn len(&self) -> usize {
        <[u8]>::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl<const N: usize> ByteSeq for [u8; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ByteSeq for str {
    #[inline]
    fn len(&self) -> usize {
        str::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self.as_bytes()[index]
    }
}

impl ByteSeq for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self[index]
    }
}

impl ByteSeq for String {
    #[inline]
    fn len(&self) -> usize {
        String::len(self)
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self.as_bytes()[index]
    }
}

impl<S: ByteSeq + ?Sized> ByteSeq for &S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        (**self).at(index)
    }
}

/// Case-insensitive view: every read goes through ASCII lowercasing.
///
/// Nothing is copied. Bytes outside `A..=Z` (including every non-ASCII byte)
/// pass through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Lowercased<'a, S: ?Sized>(pub &'a S);

impl<S: ByteSeq + ?Sized> ByteSeq for Lowercased<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        self.0.at(index).to_ascii_lowercase()
    }
}

/// Contiguous sub-view `[start, start + len)` of another sequence.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a, S: ?Sized> {
    seq: &'a S,
    start: usize,
    len: usize,
}

impl<'a, S: ByteSeq + ?Sized> Window<'a, S> {
    /// View the whole of `seq`.
    pub fn full(seq: &'a S) -> Self {
        Self {
            seq,
            start: 0,
            len: seq.len(),
        }
    }

    /// View `len` elements of `seq` starting at `start`.
    pub fn new(seq: &'a S, start: usize, len: usize) -> Self {
        assert!(
            start + len <= seq.len(),
            "window [{}, {}) exceeds sequence length {}",
            start,
            start + len,
            seq.len()
        );
        Self { seq, start, len }
    }
}

impl<S: ByteSeq + ?Sized> ByteSeq for Window<'_, S> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn at(&self, index: usize) -> u8 {
        debug_assert!(index < self.len);
        self.seq.at(self.start + index)
    }
}

/// Lengths of the common prefix and of the common suffix of what remains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Affix {
    pub prefix: usize,
    pub suffix: usize,
}

impl Affix {
    pub fn total(&self) -> usize {
        self.prefix + self.suffix
    }
}

/// Number of leading elements `a` and `b` share.
pub fn common_prefix_len<A, B>(a: &A, b: &B) -> usize
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let limit = a.len().min(b.len());
    let mut k = 0;
    while k < limit && a.at(k) == b.at(k) {
        k += 1;
    }
    k
}

/// Common prefix, then common suffix of the remainders. The two never overlap.
pub fn common_affix<A, B>(a: &A, b: &B) -> Affix
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let prefix = common_prefix_len(a, b);
    let limit = a.len().min(b.len()) - prefix;
    let (la, lb) = (a.len(), b.len());
    let mut suffix = 0;
    while suffix < limit && a.at(la - 1 - suffix) == b.at(lb - 1 - suffix) {
        suffix += 1;
    }
    Affix { prefix, suffix }
}

/// Strip the common affix from both sequences.
///
/// Edit operations inside a shared prefix or suffix never help, so the
/// distance engines run their DP over the two returned windows only.
pub fn trim_affix<'a, A, B>(a: &'a A, b: &'a B) -> (Window<'a, A>, Window<'a, B>, Affix)
where
    A: ByteSeq + ?Sized,
    B: ByteSeq + ?Sized,
{
    let affix = common_affix(a, b);
    let wa = Window::new(a, affix.prefix, a.len() - affix.total());
    let wb = Window::new(b, affix.prefix, b.len() - affix.total());
    (wa, wb, affix)
}
