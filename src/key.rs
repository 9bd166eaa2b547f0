// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The composite key and its deliberately backwards ordering.
//!
//! `OwlKey` orders **descending** on nickname, then **descending** on species.
//! Yes, descending. The registry this models was documented as ascending and
//! implemented as descending, and downstream iteration order depends on the
//! implemented behavior — so descending is the contract here, not a bug to fix.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - `a == b` implies `a.cmp(&b) == Ordering::Equal` implies equal hashes.
//!   `Eq` and `Hash` are derived from the same two fields the manual `Ord`
//!   compares, so the three stay consistent by construction.
//! - Keys are immutable value objects. They go into maps; mutating one after
//!   insertion would corrupt the map, so no field is ever exposed mutably.
//! - Absent fields are part of the total order: absent sorts **after** any
//!   present value, on either field. The reference implementation crashed on
//!   an absent species; `Ord` demands totality, so the rule is explicit.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite registry key: an owl's nickname and species, either optional.
///
/// Equality and hashing use both fields. The natural order is descending on
/// `nickname`, then descending on `species`, with absent fields sorting last.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwlKey {
    pub nickname: Option<String>,
    pub species: Option<String>,
}

impl OwlKey {
    /// Key with both fields present. The common case.
    pub fn new(nickname: impl Into<String>, species: impl Into<String>) -> Self {
        OwlKey {
            nickname: Some(nickname.into()),
            species: Some(species.into()),
        }
    }

    /// Key with only a nickname, species unknown.
    pub fn nickname_only(nickname: impl Into<String>) -> Self {
        OwlKey {
            nickname: Some(nickname.into()),
            species: None,
        }
    }

    /// The identity projection: the pair of fields equality and hashing see.
    ///
    /// Two keys equal under `==` always project identically.
    pub fn projection(&self) -> (Option<&str>, Option<&str>) {
        (self.nickname.as_deref(), self.species.as_deref())
    }
}

/// Descending comparison of one optional field, absent sorting last.
///
/// Present values compare reversed (`b.cmp(a)`); an absent value is greater
/// than any present one so it lands at the end of a sorted run.
fn cmp_field_desc(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl Ord for OwlKey {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_field_desc(self.nickname.as_deref(), other.nickname.as_deref())
            .then_with(|| cmp_field_desc(self.species.as_deref(), other.species.as_deref()))
    }
}

impl PartialOrd for OwlKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OwlKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            self.nickname.as_deref().unwrap_or("?"),
            self.species.as_deref().unwrap_or("?")
        )
    }
}

/// A registry entry: one owl and the human it answers to (allegedly).
///
/// Owned by exactly one container at a time; containers never share entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub key: OwlKey,
    pub owner: String,
}

impl Registration {
    pub fn new(key: OwlKey, owner: impl Into<String>) -> Self {
        Registration {
            key,
            owner: owner.into(),
        }
    }
}
