//! Canonical container operations over a composite-keyed owl registry.
//!
//! This crate demonstrates membership search, extremum queries, insertion,
//! deletion, and ordering over five container shapes — a hash-keyed map, an
//! insertion-ordered map, a numeric sequence, a min-priority queue, and a
//! duplicate-absorbing set — all sharing one comparator subsystem.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐     ┌────────────────┐     ┌──────────────┐
//! │   key.rs   │────▶│ projection.rs  │────▶│   store/     │
//! │  (OwlKey,  │     │ (sort + binary │     │ (registries, │
//! │ descending │     │  search by a   │     │  sequence,   │
//! │   order)   │     │  projection)   │     │  queue, set) │
//! └────────────┘     └────────────────┘     └──────┬───────┘
//!                                                  │
//!        ┌────────────┐    ┌─────────────┐         ▼
//!        │ fixture.rs │───▶│  runner.rs  │◀── snapshot.rs / stopwatch.rs
//!        │ (datasets) │    │ (fixed op   │    (I/O + timing collaborators)
//!        └────────────┘    │  sequence)  │
//!                          └─────────────┘
//! ```
//!
//! Data flows one way: datasets load, containers hold them, the runner walks
//! the fixed choreography and prints results. Nothing depends on the runner.
//!
//! # The ordering quirk
//!
//! `OwlKey`'s natural order is **descending** on both fields. That is the
//! documented contract inherited from the system this models, not an
//! accident — see [`key`] before "fixing" anything.

pub mod fixture;
pub mod key;
pub mod projection;
pub mod runner;
pub mod snapshot;
pub mod stopwatch;
pub mod store;

pub use fixture::Fixture;
pub use key::{OwlKey, Registration};
pub use projection::{find_by_projection, sorted_by};
pub use runner::OperationRunner;
pub use snapshot::{load_sequence, save_sequence, sorted_path, SORTED_SUFFIX};
pub use store::{HashRegistry, KeyedStore, MinQueue, OrderedRegistry, Sequence, UniqueSet};
