// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Demo datasets as values, not globals.
//!
//! The original baked its sample data into the entry point; here it is an
//! explicit [`Fixture`] handed to the runner at construction, so tests (and
//! the `--fixture` flag) can substitute arbitrary datasets. The built-in
//! sample is the canonical one: ten owls with Ukrainian nicknames, two probe
//! targets that exist, one registration to add.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::key::{OwlKey, Registration};

/// Everything a demo run needs: the registry dataset, the probe targets, and
/// the numeric dataset with its own search target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    /// The keyed dataset, in insertion order.
    pub registrations: Vec<Registration>,
    /// Key probed before and after sorting, then removed.
    pub key_to_find: OwlKey,
    /// Key inserted mid-choreography.
    pub key_to_add: OwlKey,
    /// Owner probed via value-projection search, then bulk-removed.
    pub owner_to_find: String,
    /// Owner registered under `key_to_add`.
    pub owner_to_add: String,
    /// The numeric dataset, in file/insertion order.
    pub numbers: Vec<i32>,
    /// Value probed in every numeric shape.
    pub number_to_find: i32,
}

impl Fixture {
    /// The built-in sample dataset.
    pub fn sample() -> Self {
        let registrations = vec![
            Registration::new(OwlKey::new("Тум", "Сова вухата"), "Андрій"),
            Registration::new(OwlKey::new("Луна", "Полярна сова"), "Ірина"),
            Registration::new(OwlKey::new("Барсик", "Сова сіра"), "Олена"),
            Registration::new(OwlKey::new("Боні", "Сипуха"), "Олена"),
            Registration::new(OwlKey::new("Тайсон", "Сова болотяна"), "Ірина"),
            Registration::new(OwlKey::new("Барсик", "Сичик-горобець"), "Андрій"),
            Registration::new(OwlKey::new("Ґуфі", "Сова болотяна"), "Тимофій"),
            Registration::new(OwlKey::new("Боні", "Сова яструбина"), "Поліна"),
            Registration::new(OwlKey::new("Муся", "Сова білолиця"), "Стефанія"),
            Registration::new(OwlKey::new("Чіпо", "Сичик-хатник"), "Ярослав"),
        ];

        Fixture {
            registrations,
            key_to_find: OwlKey::new("Луна", "Полярна сова"),
            key_to_add: OwlKey::new("Кір", "Сова вухата"),
            owner_to_find: "Олена".to_string(),
            owner_to_add: "Богдан".to_string(),
            numbers: vec![734, 158, 2301, 89, 158, 47, 998, 5120, 12, 640],
            number_to_find: 998,
        }
    }

    /// Load a fixture from a JSON file, overriding the built-in dataset.
    pub fn from_json_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        serde_json::from_reader(reader).map_err(|json_error| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{}: invalid fixture: {}", path.display(), json_error),
            )
        })
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::sample()
    }
}
