// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sort-then-binary-search over a projected field.
//!
//! Containers keyed by `OwlKey` answer key lookups in O(1), but finding an
//! entry by its *value* means building a value-sorted view first. This module
//! is that view: collect references, stable-sort by the projection alone,
//! binary-search with the same comparator. O(n log n) per call, deliberately —
//! the crate exists to make that trade-off visible next to the O(1) path.
//!
//! The original formulation searched with a synthetic "entry with only a value
//! set". Here the probe is just a `&P`: the comparator is keyed on the
//! projection, so nothing else needs to exist.

use std::cmp::Ordering;

/// Locate an item by a projected field inside an arbitrarily-ordered collection.
///
/// Copies references into a scratch vector, stable-sorts by `project`, and
/// binary-searches for `target`. When several items share the target
/// projection any one of them may come back; ties are resolved by whatever
/// position binary search lands on, not by input order. Empty input is `None`.
///
/// Projections only need `Ord`. `Option` projections get `None < Some` from
/// the derived order, i.e. absent values sort before present ones.
pub fn find_by_projection<'a, T, P, F>(
    items: impl IntoIterator<Item = &'a T>,
    project: F,
    target: &P,
) -> Option<&'a T>
where
    P: Ord + ?Sized,
    F: Fn(&T) -> &P,
{
    let mut sorted: Vec<&T> = items.into_iter().collect();
    sorted.sort_by(|a, b| project(a).cmp(project(b)));
    sorted
        .binary_search_by(|item| project(item).cmp(target))
        .ok()
        .map(|position| sorted[position])
}

/// Sorted view of a collection under an arbitrary comparator, for callers
/// that want the whole ordering rather than a single probe.
pub fn sorted_by<'a, T, F>(
    items: impl IntoIterator<Item = &'a T>,
    mut compare: F,
) -> Vec<&'a T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted: Vec<&T> = items.into_iter().collect();
    sorted.sort_by(|a, b| compare(a, b));
    sorted
}
