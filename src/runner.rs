// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed operation choreography.
//!
//! One linear script per container shape: search before sorting, sort, search
//! again, insert, delete by key, delete by value, report the final size. No
//! state machine — every step is independent and re-entrant, so running a
//! step twice is safe and leaves container invariants intact.
//!
//! Not-found is an inline message and execution continues; only I/O failures
//! (snapshot load/save) abort, propagated to the caller. Timing goes through
//! [`stopwatch`](crate::stopwatch) and is printed next to each step.

use std::io;
use std::path::PathBuf;

use crate::fixture::Fixture;
use crate::snapshot;
use crate::stopwatch::{report, timed};
use crate::store::{HashRegistry, KeyedStore, MinQueue, OrderedRegistry, Sequence, UniqueSet};

/// Drives the demo choreography over a [`Fixture`].
///
/// The runner owns no containers; each demo builds fresh ones from the
/// fixture, so demos never observe each other's mutations.
pub struct OperationRunner {
    fixture: Fixture,
    data_path: Option<PathBuf>,
}

impl OperationRunner {
    pub fn new(fixture: Fixture) -> Self {
        OperationRunner {
            fixture,
            data_path: None,
        }
    }

    /// Read the numeric dataset from `path` instead of the fixture, and save
    /// the sorted snapshot next to it.
    pub fn with_data_path(mut self, path: PathBuf) -> Self {
        self.data_path = Some(path);
        self
    }

    /// Run every demo in the canonical order.
    pub fn run_all(&self) -> io::Result<()> {
        self.run_map_demo();
        self.run_sequence_demo()?;
        self.run_queue_demo()?;
        self.run_set_demo()?;
        Ok(())
    }

    /// The keyed choreography over both map shapes, hash first.
    pub fn run_map_demo(&self) {
        let mut hashed = HashRegistry::from_registrations(self.fixture.registrations.clone());
        self.run_keyed("HashRegistry", &mut hashed);

        let mut ordered = OrderedRegistry::from_registrations(self.fixture.registrations.clone());
        self.run_keyed("OrderedRegistry", &mut ordered);
    }

    fn run_keyed<S: KeyedStore>(&self, label: &str, store: &mut S) {
        println!("\n========= {} =========", label);
        println!("initial size: {}", store.len());

        self.find_key_step(label, store);
        self.find_owner_step(label, store);

        print_entries(label, store);
        let ((), elapsed) = timed(|| store.sort_by_key());
        report(&format!("sort {} by key", label), elapsed);
        print_entries(label, store);

        self.find_key_step(label, store);
        self.find_owner_step(label, store);

        let key = self.fixture.key_to_add.clone();
        let owner = self.fixture.owner_to_add.clone();
        let (displaced, elapsed) = timed(|| store.insert(key, owner));
        report(&format!("insert into {}", label), elapsed);
        match displaced {
            Some(previous) => println!(
                "added '{}' -> '{}' (displaced '{}')",
                self.fixture.key_to_add, self.fixture.owner_to_add, previous
            ),
            None => println!(
                "added '{}' -> '{}'",
                self.fixture.key_to_add, self.fixture.owner_to_add
            ),
        }

        let (removed, elapsed) = timed(|| store.remove_by_key(&self.fixture.key_to_find));
        report(&format!("remove by key from {}", label), elapsed);
        match removed {
            Some(owner) => println!(
                "removed key '{}', owner was '{}'",
                self.fixture.key_to_find, owner
            ),
            None => println!("key '{}' not present, nothing removed", self.fixture.key_to_find),
        }

        let (count, elapsed) = timed(|| store.remove_all_by_owner(&self.fixture.owner_to_find));
        report(&format!("remove by owner from {}", label), elapsed);
        println!(
            "removed {} entries owned by '{}'",
            count, self.fixture.owner_to_find
        );

        println!("final size: {}", store.len());
    }

    fn find_key_step<S: KeyedStore>(&self, label: &str, store: &S) {
        let key = &self.fixture.key_to_find;
        let (found, elapsed) = timed(|| store.find_by_key(key).map(str::to_owned));
        report(&format!("find by key in {}", label), elapsed);
        match found {
            Some(owner) => println!("key '{}' found, owner: {}", key, owner),
            None => println!("key '{}' not present in {}", key, label),
        }
    }

    fn find_owner_step<S: KeyedStore>(&self, label: &str, store: &S) {
        let owner = &self.fixture.owner_to_find;
        let (found, elapsed) = timed(|| {
            store
                .find_by_owner(owner)
                .map(|(key, _)| key.clone())
        });
        report(&format!("binary search by owner in {}", label), elapsed);
        match found {
            Some(key) => println!("owner '{}' found via value search, key: {}", owner, key),
            None => println!("owner '{}' not present in {}", owner, label),
        }
    }

    /// Sequence demo: linear search, extremums, sort, binary search, and —
    /// when a data path is configured — the sorted snapshot save.
    pub fn run_sequence_demo(&self) -> io::Result<()> {
        println!("\n========= Sequence =========");
        let mut sequence = Sequence::new(self.load_numbers()?);
        println!("size: {}", sequence.len());

        let target = self.fixture.number_to_find;
        let (position, elapsed) = timed(|| sequence.position_of(target));
        report("linear search in sequence", elapsed);
        print_position(target, position);
        print_min_max("sequence", sequence.min_max());

        let ((), elapsed) = timed(|| sequence.sort());
        report("sort sequence", elapsed);

        let (position, elapsed) = timed(|| sequence.binary_position_of(target));
        report("binary search in sequence", elapsed);
        print_position(target, position);
        print_min_max("sequence", sequence.min_max());

        if let Some(path) = &self.data_path {
            let output = snapshot::sorted_path(path);
            snapshot::save_sequence(sequence.values(), &output)?;
            println!("sorted snapshot saved to {}", output.display());
        }
        Ok(())
    }

    /// Queue demo: membership, extremums, and the peek → pop → peek script
    /// that shows the min-heap invariant holding after each step.
    pub fn run_queue_demo(&self) -> io::Result<()> {
        println!("\n========= MinQueue =========");
        let mut queue = MinQueue::new(self.load_numbers()?);
        println!("size: {}", queue.len());

        let target = self.fixture.number_to_find;
        let (found, elapsed) = timed(|| queue.contains(target));
        report("search in queue", elapsed);
        print_membership(target, found, "queue");
        print_min_max("queue", queue.min_max());

        match queue.peek() {
            Some(head) => println!("queue head (peek): {}", head),
            None => println!("queue is empty, nothing to peek"),
        }
        match queue.pop() {
            Some(head) => println!("removed head (pop): {}", head),
            None => println!("queue is empty, nothing to pop"),
        }
        match queue.peek() {
            Some(head) => println!("new queue head: {}", head),
            None => println!("queue is empty after pop"),
        }
        Ok(())
    }

    /// Set demo: membership, extremums, array-vs-set coverage, then the
    /// sorted-array pass over the same numbers.
    pub fn run_set_demo(&self) -> io::Result<()> {
        println!("\n========= UniqueSet =========");
        let numbers = self.load_numbers()?;
        let set = UniqueSet::new(numbers.iter().copied());
        println!("array size: {}, set size: {}", numbers.len(), set.len());

        let target = self.fixture.number_to_find;
        let (found, elapsed) = timed(|| set.contains(target));
        report("search in set", elapsed);
        print_membership(target, found, "set");
        print_min_max("set", set.min_max());

        if set.contains_all(&numbers) {
            println!("every array element is present in the set");
        } else {
            println!("some array elements are missing from the set");
        }

        let mut sequence = Sequence::new(numbers);
        let ((), elapsed) = timed(|| sequence.sort());
        report("sort backing array", elapsed);
        let (position, elapsed) = timed(|| sequence.binary_position_of(target));
        report("binary search in backing array", elapsed);
        print_position(target, position);
        Ok(())
    }

    fn load_numbers(&self) -> io::Result<Vec<i32>> {
        match &self.data_path {
            Some(path) => snapshot::load_sequence(path),
            None => Ok(self.fixture.numbers.clone()),
        }
    }
}

fn print_entries<S: KeyedStore>(label: &str, store: &S) {
    println!("--- entries in {} ---", label);
    for (key, owner) in store.entries() {
        println!("  {} -> {}", key, owner);
    }
}

fn print_position(target: i32, position: Option<usize>) {
    match position {
        Some(index) => println!("value {} found at position {}", target, index),
        None => println!("value {} not present", target),
    }
}

fn print_membership(target: i32, found: bool, shape: &str) {
    if found {
        println!("value {} found in {}", target, shape);
    } else {
        println!("value {} not present in {}", target, shape);
    }
}

fn print_min_max(shape: &str, min_max: Option<(i32, i32)>) {
    match min_max {
        Some((min, max)) => println!("{} min: {}, max: {}", shape, min, max),
        None => println!("{} is empty, no extremums", shape),
    }
}
