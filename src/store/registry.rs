// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two keyed registry shapes.
//!
//! `HashRegistry` is the O(1)-lookup, no-order shape. `OrderedRegistry` keeps
//! insertion order until told to sort, after which iteration follows the
//! descending key comparator. Same trait, different complexity profile —
//! that contrast is the whole point of having both.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::key::{OwlKey, Registration};
use crate::store::KeyedStore;

/// Hash-backed registry: O(1) key lookup, arbitrary iteration order.
#[derive(Debug, Default, Clone)]
pub struct HashRegistry {
    inner: HashMap<OwlKey, String>,
}

impl HashRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registrations(registrations: impl IntoIterator<Item = Registration>) -> Self {
        HashRegistry {
            inner: registrations
                .into_iter()
                .map(|r| (r.key, r.owner))
                .collect(),
        }
    }
}

impl KeyedStore for HashRegistry {
    fn find_by_key(&self, key: &OwlKey) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    fn insert(&mut self, key: OwlKey, owner: String) -> Option<String> {
        self.inner.insert(key, owner)
    }

    fn remove_by_key(&mut self, key: &OwlKey) -> Option<String> {
        self.inner.remove(key)
    }

    fn remove_all_by_owner(&mut self, owner: &str) -> usize {
        let before = self.inner.len();
        self.inner.retain(|_, registered| registered.as_str() != owner);
        before - self.inner.len()
    }

    /// Drain, sort by key, re-insert into the same map.
    ///
    /// The hasher is kept, so the rebuild is deterministic — and the hash
    /// shape promptly forgets the order anyway. The original did exactly
    /// this dance (sort into an ordered map, pour back into the hash map);
    /// it is preserved as the baseline the ordered shape improves on.
    fn sort_by_key(&mut self) {
        let mut entries: Vec<(OwlKey, String)> = self.inner.drain().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        self.inner.extend(entries);
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn entries(&self) -> Vec<(&OwlKey, &str)> {
        self.inner
            .iter()
            .map(|(key, owner)| (key, owner.as_str()))
            .collect()
    }
}

/// Insertion-ordered registry: iteration follows insertion until
/// `sort_by_key`, after which it follows the descending key comparator.
///
/// Key lookup is O(1) (indexed hash); the order costs on removal, which
/// shifts to preserve it.
#[derive(Debug, Default, Clone)]
pub struct OrderedRegistry {
    inner: IndexMap<OwlKey, String>,
}

impl OrderedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_registrations(registrations: impl IntoIterator<Item = Registration>) -> Self {
        OrderedRegistry {
            inner: registrations
                .into_iter()
                .map(|r| (r.key, r.owner))
                .collect(),
        }
    }
}

impl KeyedStore for OrderedRegistry {
    fn find_by_key(&self, key: &OwlKey) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    fn insert(&mut self, key: OwlKey, owner: String) -> Option<String> {
        self.inner.insert(key, owner)
    }

    fn remove_by_key(&mut self, key: &OwlKey) -> Option<String> {
        // shift_remove keeps the remaining iteration order intact
        self.inner.shift_remove(key)
    }

    fn remove_all_by_owner(&mut self, owner: &str) -> usize {
        let before = self.inner.len();
        self.inner.retain(|_, registered| registered.as_str() != owner);
        before - self.inner.len()
    }

    /// In-place stable sort by the key comparator. Idempotent: sorting a
    /// sorted registry leaves the iteration order untouched.
    fn sort_by_key(&mut self) {
        self.inner.sort_by(|a, _, b, _| a.cmp(b));
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn entries(&self) -> Vec<(&OwlKey, &str)> {
        self.inner
            .iter()
            .map(|(key, owner)| (key, owner.as_str()))
            .collect()
    }
}
