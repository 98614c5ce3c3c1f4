// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Views over caller-owned candidate collections.
//!
//! The pipeline never owns or copies candidates. It reads keys through
//! [`Candidates`] (or [`MultiKeyCandidates`] for "best field wins" matching)
//! and reorders the caller's storage through [`Reorder`].
//!
//! ```
//! use fuzzrank::{Records, Sorter};
//!
//! struct Song {
//!     title: String,
//!     plays: u32,
//! }
//!
//! let mut songs = vec![
//!     Song { title: "Yellow".into(), plays: 3 },
//!     Song { title: "Hello".into(), plays: 7 },
//! ];
//! let mut view = Records::new(&mut songs, |s: &Song| s.title.as_bytes());
//! Sorter::default().sort(&mut view, "hello");
//! assert_eq!(songs[0].plays, 7);
//! ```

/// Indexable collection with one key per candidate.
pub trait Candidates {
    fn len(&self) -> usize;

    fn key(&self, index: usize) -> &[u8];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Indexable collection where each candidate has zero or more keys.
pub trait MultiKeyCandidates {
    fn len(&self) -> usize;

    /// Call `visit` once per key of candidate `index`.
    fn for_each_key(&self, index: usize, visit: &mut dyn FnMut(&[u8]));

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-place reordering of the caller's storage.
pub trait Reorder {
    fn swap(&mut self, i: usize, j: usize);
}

impl<S: AsRef<[u8]>> Candidates for [S] {
    #[inline]
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    #[inline]
    fn key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }
}

impl<S: AsRef<[u8]>> Candidates for Vec<S> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn key(&self, index: usize) -> &[u8] {
        self[index].as_ref()
    }
}

impl<S: AsRef<[u8]>> MultiKeyCandidates for [Vec<S>] {
    #[inline]
    fn len(&self) -> usize {
        <[Vec<S>]>::len(self)
    }

    fn for_each_key(&self, index: usize, visit: &mut dyn FnMut(&[u8])) {
        for key in &self[index] {
            visit(key.as_ref());
        }
    }
}

impl<S: AsRef<[u8]>> MultiKeyCandidates for Vec<Vec<S>> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn for_each_key(&self, index: usize, visit: &mut dyn FnMut(&[u8])) {
        self.as_slice().for_each_key(index, visit);
    }
}

impl<T> Reorder for [T] {
    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T> Reorder for Vec<T> {
    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

/// Caller-owned records with a key-extraction function.
pub struct Records<'a, T> {
    items: &'a mut [T],
    key: fn(&T) -> &[u8],
}

impl<'a, T> Records<'a, T> {
    pub fn new(items: &'a mut [T], key: fn(&T) -> &[u8]) -> Self {
        Self { items, key }
    }

    pub fn items(&self) -> &[T] {
        self.items
    }
}

impl<T> Candidates for Records<'_, T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn key(&self, index: usize) -> &[u8] {
        (self.key)(&self.items[index])
    }
}

impl<T> Reorder for Records<'_, T> {
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }
}

/// Caller-owned records with several searchable fields each.
pub struct MultiKeyRecords<'a, T> {
    items: &'a mut [T],
    keys: fn(&T) -> Vec<&[u8]>,
}

impl<'a, T> MultiKeyRecords<'a, T> {
    pub fn new(items: &'a mut [T], keys: fn(&T) -> Vec<&[u8]>) -> Self {
        Self { items, keys }
    }

    pub fn items(&self) -> &[T] {
        self.items
    }
}

impl<T> MultiKeyCandidates for MultiKeyRecords<'_, T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn for_each_key(&self, index: usize, visit: &mut dyn FnMut(&[u8])) {
        for key in (self.keys)(&self.items[index]) {
            visit(key);
        }
    }
}

impl<T> Reorder for MultiKeyRecords<'_, T> {
    fn swap(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }
}
