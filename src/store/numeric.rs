// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three numeric shapes: sequence, min-queue, insertion-ordered set.
//!
//! All three expose membership search and extremum queries with the same
//! semantics: a miss is `None`, an empty shape yields `None`, nothing panics.
//! What differs is cost and what each shape guarantees about order — the
//! sequence can be sorted and binary-searched, the queue keeps its minimum
//! at the head, the set absorbs duplicates while remembering first-seen order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use indexmap::IndexSet;

/// A resizable numeric sequence, searchable linearly or (after `sort`)
/// by binary search.
#[derive(Debug, Default, Clone)]
pub struct Sequence {
    values: Vec<i32>,
}

impl Sequence {
    pub fn new(values: Vec<i32>) -> Self {
        Sequence { values }
    }

    /// Linear scan for `target`; works in any order. O(n).
    pub fn position_of(&self, target: i32) -> Option<usize> {
        self.values.iter().position(|&value| value == target)
    }

    /// Binary search for `target`. O(log n), but only meaningful after
    /// [`sort`](Self::sort) — on an unsorted sequence the result is
    /// unspecified, same as `slice::binary_search`.
    pub fn binary_position_of(&self, target: i32) -> Option<usize> {
        self.values.binary_search(&target).ok()
    }

    /// Sort ascending, unstably — these are plain integers, equal elements
    /// are indistinguishable.
    pub fn sort(&mut self) {
        self.values.sort_unstable();
    }

    /// Minimum and maximum in one pass; `None` when empty.
    pub fn min_max(&self) -> Option<(i32, i32)> {
        let mut values = self.values.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        }))
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Min-priority queue: the head is always the smallest remaining element.
///
/// `BinaryHeap` is a max-heap, so elements go in wrapped in `Reverse`.
#[derive(Debug, Default, Clone)]
pub struct MinQueue {
    heap: BinaryHeap<Reverse<i32>>,
}

impl MinQueue {
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        MinQueue {
            heap: values.into_iter().map(Reverse).collect(),
        }
    }

    /// Membership test by full scan — heaps have no search structure. O(n).
    pub fn contains(&self, target: i32) -> bool {
        self.heap.iter().any(|&Reverse(value)| value == target)
    }

    /// The current head (minimum) without removing it.
    pub fn peek(&self) -> Option<i32> {
        self.heap.peek().map(|&Reverse(value)| value)
    }

    /// Remove and return the head. The next-smallest element becomes the
    /// new head, restoring the min-heap invariant.
    pub fn pop(&mut self) -> Option<i32> {
        self.heap.pop().map(|Reverse(value)| value)
    }

    /// Minimum is the head for free; maximum needs a scan.
    pub fn min_max(&self) -> Option<(i32, i32)> {
        let min = self.peek()?;
        let max = self.heap.iter().map(|&Reverse(value)| value).max()?;
        Some((min, max))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// Duplicate-absorbing set that remembers first-seen insertion order.
#[derive(Debug, Default, Clone)]
pub struct UniqueSet {
    inner: IndexSet<i32>,
}

impl UniqueSet {
    /// Build from any iterator; duplicates are silently absorbed, first
    /// occurrence wins the iteration slot.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        UniqueSet {
            inner: values.into_iter().collect(),
        }
    }

    pub fn contains(&self, target: i32) -> bool {
        self.inner.contains(&target)
    }

    /// True when every element of `values` is present. Used to check that a
    /// source array survived deduplication intact.
    pub fn contains_all(&self, values: &[i32]) -> bool {
        values.iter().all(|value| self.inner.contains(value))
    }

    pub fn min_max(&self) -> Option<(i32, i32)> {
        let mut values = self.inner.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), value| {
            (lo.min(value), hi.max(value))
        }))
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.inner.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
