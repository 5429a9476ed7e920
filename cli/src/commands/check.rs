//! Check Command
//!
//! Verify checksums from file (like sha256sum -c).

use super::hash::{hash_file, HashOptions};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;

// =============================================================================
// CHECK
// =============================================================================

/// Verify checksums from a checksum file.
///
/// Each digest's length comes from its hex length, so files produced with
/// `--length` verify without repeating it. Returns `false` if any entry
/// failed.
pub fn check_mode(checksum_file: &PathBuf, options: &HashOptions) -> Result<bool> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected_hash, file_path)) = line.split_once("  ") else {
            warn!(line = line_no + 1, "invalid checksum line: {line}");
            continue;
        };
        let expected_hash = expected_hash.trim();
        let file_path = file_path.trim();
        total += 1;

        match check_entry(expected_hash, Path::new(file_path), options) {
            Ok(true) => println!("{file_path}: OK"),
            Ok(false) => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            Err(e) => {
                println!("{file_path}: FAILED ({e:#})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
    }

    Ok(failed == 0)
}

fn check_entry(expected_hash: &str, path: &Path, options: &HashOptions) -> Result<bool> {
    let expected = hex::decode(expected_hash).context("Invalid hex digest")?;
    let digest = hash_file(path, &options.params(expected.len()))?;
    Ok(digest == *expected.as_slice())
}
