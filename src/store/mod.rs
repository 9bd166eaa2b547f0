// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Container shapes and the capability trait that unifies them.
//!
//! Five shapes, two families. The keyed family holds `OwlKey -> owner`
//! registrations in a hash-backed map or an insertion-ordered one; both
//! implement [`KeyedStore`] so the operation choreography is written once.
//! The numeric family holds plain integers as a sequence, a min-priority
//! queue, or an insertion-ordered duplicate-absorbing set.
//!
//! The interesting part is what stays the same across shapes: lookups that
//! miss return `None` (never a panic), extremum queries on empty shapes
//! return `None`, and find-by-value always goes through the
//! [`projection`](crate::projection) sort-then-binary-search, whatever the
//! backing container.

mod numeric;
mod registry;

pub use numeric::{MinQueue, Sequence, UniqueSet};
pub use registry::{HashRegistry, OrderedRegistry};

use crate::key::OwlKey;
use crate::projection::find_by_projection;

/// The capability set shared by both keyed shapes.
///
/// Per-shape complexity differs and is documented on each impl; the contract
/// here is behavioral. `remove_all_by_owner` removes *every* matching entry
/// and reports how many went. `sort_by_key` rebuilds iteration order using
/// `OwlKey`'s descending comparator; on a shape that cannot hold an order the
/// rebuild still happens, and the shape forgetting it is the demonstration.
pub trait KeyedStore {
    /// Look up the owner registered under `key`.
    fn find_by_key(&self, key: &OwlKey) -> Option<&str>;

    /// Register `owner` under `key`, returning the displaced owner if the
    /// key was already present.
    fn insert(&mut self, key: OwlKey, owner: String) -> Option<String>;

    /// Remove the entry under `key`, returning its owner if it existed.
    fn remove_by_key(&mut self, key: &OwlKey) -> Option<String>;

    /// Remove every entry whose owner equals `owner`; returns the count
    /// removed. Calling it again immediately removes zero.
    fn remove_all_by_owner(&mut self, owner: &str) -> usize;

    /// Rebuild iteration order by the key comparator. Idempotent wherever
    /// the shape can hold an order at all.
    fn sort_by_key(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the entries in the shape's current iteration order.
    fn entries(&self) -> Vec<(&OwlKey, &str)>;

    /// Locate an entry by its owner, not its key.
    ///
    /// Delegates to the value-projection search: O(n log n) per call against
    /// the O(1)/O(n) of `find_by_key`. With several entries under the same
    /// owner, any one of them may come back.
    fn find_by_owner(&self, owner: &str) -> Option<(&OwlKey, &str)> {
        let pairs = self.entries();
        find_by_projection(&pairs, |pair: &(&OwlKey, &str)| pair.1, owner)
            .map(|pair| (pair.0, pair.1))
    }
}
