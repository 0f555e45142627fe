//! Input handling for raw table names read from stdin.

use anyhow::{Context, Result};
use std::io::{self, BufRead};

/// Read raw table names from stdin, one per line.
pub fn read_names_from_stdin() -> Result<Vec<String>> {
    let stdin = io::stdin();
    read_names(stdin.lock()).context("Failed to read from stdin")
}

/// Collect non-blank lines. Lines are kept as written so the parser sees the exact
/// raw text, including any bracket quoting.
pub fn read_names<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            names.push(line);
        }
    }
    Ok(names)
}
