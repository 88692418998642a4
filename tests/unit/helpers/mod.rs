//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use wordstats::stats::{FinalTally, RangeSpec, StatsOptions, WordStats};

/// Write `contents` to a file in a fresh temporary directory.
pub fn temp_text(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("input.txt");
    fs::write(&path, contents).expect("Failed to write input");
    (temp_dir, path)
}

/// Options for `ranges` with everything else at defaults.
pub fn options(ranges: &str) -> StatsOptions {
    StatsOptions::with_spec(RangeSpec::parse(ranges).expect("valid ranges"))
}

/// Count `text` with `options`.
pub fn analyze(options: StatsOptions, text: &str) -> FinalTally {
    WordStats::new(options)
        .analyze_text(text)
        .expect("analysis succeeds")
}

/// (label, count) pairs of a tally, in display order.
pub fn rows(tally: &FinalTally) -> Vec<(String, u64)> {
    tally
        .rows()
        .iter()
        .map(|row| (row.bucket.label.clone(), row.count))
        .collect()
}

/// Pseudo-random text of `words` words with lengths 1..=14.
pub fn generated_text(words: usize) -> String {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut out = String::new();
    for i in 0..words {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        let len = (seed % 14) as usize + 1;
        out.push_str(&"x".repeat(len));
        out.push(if i % 11 == 10 { '\n' } else { ' ' });
    }
    out
}
