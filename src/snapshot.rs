// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flat text snapshots of numeric sequences.
//!
//! The format is as plain as it gets: one decimal integer per line, optional
//! UTF-8 BOM on the first line (some editors insist), blank lines ignored.
//! The writer preserves order and ends with a newline, so load → save → load
//! is byte-identical modulo that trailing newline.
//!
//! Failure policy per the error taxonomy: an unreadable path propagates the
//! underlying I/O error; a line that isn't an integer is `InvalidData` with
//! the path and line number attached. Neither is recovered — snapshots are
//! inputs, and a bad input kills the run.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix appended to a snapshot path when saving its sorted counterpart.
pub const SORTED_SUFFIX: &str = ".sorted";

/// Load a newline-separated integer snapshot.
///
/// Strips a leading BOM, skips blank lines, and fails fast on the first
/// malformed line with the path and 1-based line number in the message.
pub fn load_sequence(path: impl AsRef<Path>) -> io::Result<Vec<i32>> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let mut values = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = if index == 0 {
            line.trim_start_matches('\u{feff}')
        } else {
            line.as_str()
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = line.parse::<i32>().map_err(|parse_error| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "{}: line {}: invalid integer {:?}: {}",
                    path.display(),
                    index + 1,
                    line,
                    parse_error
                ),
            )
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Save a sequence in the same line-based format, preserving order.
pub fn save_sequence(values: &[i32], path: impl AsRef<Path>) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path.as_ref())?);
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()
}

/// Derive the output path for a sorted snapshot: the original path with
/// [`SORTED_SUFFIX`] appended.
pub fn sorted_path(path: &Path) -> PathBuf {
    let mut derived = path.as_os_str().to_owned();
    derived.push(SORTED_SUFFIX);
    PathBuf::from(derived)
}
