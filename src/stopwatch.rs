// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-operation timing, kept deliberately dumb.
//!
//! The runner wraps each container operation in [`timed`] and hands the
//! duration to [`report`]. Nothing here is a benchmark harness — for real
//! measurements use the criterion bench; this exists so the demo output can
//! show the O(1) vs O(n log n) gap inline.

use std::time::{Duration, Instant};

/// Run `operation` and return its result together with the elapsed wall time.
pub fn timed<T>(operation: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = operation();
    (result, start.elapsed())
}

/// Print a one-line timing report for a completed operation.
pub fn report(label: &str, elapsed: Duration) {
    println!("    [{} ns] {}", elapsed.as_nanos(), label);
}
