//! Unit tests for the counting pipeline through the public API

use std::sync::{Arc, Mutex};

use wordstats::stats::{
    Delimiters, ProgressReporter, RangeSpec, StatsError, StatsOptions, WordStats,
};

use crate::helpers::{analyze, generated_text, options, rows, temp_text};

fn owned(pairs: &[(&str, u64)]) -> Vec<(String, u64)> {
    pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect()
}

#[test]
fn explicit_ranges_count_and_percentages() {
    let tally = analyze(options("3-3,4-10"), "cat dog elephant");

    assert_eq!(rows(&tally), owned(&[("3-3", 2), ("4-10", 1)]));
    assert_eq!(tally.total(), 3);
    let series = tally.series();
    assert!((series.rows[0].percentage - 66.666).abs() < 0.01);
    assert!((series.rows[1].percentage - 33.333).abs() < 0.01);
}

#[test]
fn auto_mode_with_delimiter() {
    let opts = options("auto").delimiters(Delimiters::from_option(Some(";")));
    let tally = analyze(opts, "a;bb;ccc");
    assert_eq!(rows(&tally), owned(&[("1", 1), ("2", 1), ("3", 1)]));
}

#[test]
fn unbounded_range_is_rejected() {
    assert!(matches!(
        RangeSpec::parse("11-"),
        Err(StatsError::InvalidRangeFormat { .. })
    ));
}

#[test]
fn empty_input_has_zero_percentages() {
    let (_dir, path) = temp_text("");
    let tally = WordStats::new(options("1-5")).analyze_file(&path).unwrap();

    assert_eq!(tally.total(), 0);
    assert_eq!(rows(&tally), owned(&[("1-5", 0)]));
    assert_eq!(tally.series().rows[0].percentage, 0.0);
}

#[test]
fn overlapping_ranges_use_first_match() {
    let tally = analyze(options("2-3,3-5"), "abc abc");
    assert_eq!(rows(&tally), owned(&[("2-3", 2), ("3-5", 0)]));
}

#[test]
fn unmatched_words_are_excluded_unless_other() {
    let text = "a bb ccc dddd";
    let tally = analyze(options("2-3"), text);
    assert_eq!(rows(&tally), owned(&[("2-3", 2)]));
    assert_eq!(tally.total(), 2);
    assert_eq!(tally.unmatched(), 2);

    let tally = analyze(options("2-3").show_other(true), text);
    assert_eq!(rows(&tally), owned(&[("2-3", 2), ("Other", 2)]));
    assert_eq!(tally.total(), 4);
}

#[test]
fn bucket_counts_sum_to_total() {
    let text = generated_text(2_000);
    for ranges in ["1-3,4-6,7-9", "auto", "1,2,3,10-14"] {
        let tally = analyze(options(ranges).show_other(true), &text);
        let sum: u64 = tally.rows().iter().map(|r| r.count).sum();
        assert_eq!(sum, tally.total(), "ranges {}", ranges);
        assert_eq!(tally.total(), 2_000);

        let pct: f64 = tally.series().rows.iter().map(|r| r.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-6);
    }
}

#[test]
fn parallel_matches_sequential() {
    let text = generated_text(20_000);
    for ranges in ["1-2,3-5,6-14", "auto"] {
        let sequential = analyze(options(ranges), &text);
        for threads in [2, 3, 8] {
            let parallel = analyze(options(ranges).threads(threads), &text);
            assert_eq!(rows(&parallel), rows(&sequential), "threads {}", threads);
            assert_eq!(parallel.unmatched(), sequential.unmatched());
        }
    }
}

#[test]
fn parallel_matches_sequential_in_delimiter_mode() {
    let text = generated_text(5_000).replace(' ', ";");
    let delims = Delimiters::from_option(Some(";"));
    let sequential = analyze(options("auto").delimiters(delims.clone()), &text);
    let parallel = analyze(options("auto").delimiters(delims).threads(4), &text);
    assert_eq!(rows(&parallel), rows(&sequential));
}

#[test]
fn fill_gaps_lists_missing_lengths() {
    let tally = analyze(options("auto").fill_gaps(true), "a cccc");
    assert_eq!(
        rows(&tally),
        owned(&[("1", 1), ("2", 0), ("3", 0), ("4", 1)])
    );
}

#[test]
fn progress_reaches_completion() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let text = generated_text(30_000);
    let reporter = ProgressReporter::with_callback(text.len() as u64, move |pct| {
        sink.lock().unwrap().push(pct);
    });

    WordStats::new(StatsOptions::with_spec(RangeSpec::Auto).threads(4))
        .analyze_with(&text, Some(&reporter))
        .unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.last().copied(), Some(100.0));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = WordStats::new(options("1-5"))
        .analyze_file(&dir.path().join("missing.txt"))
        .unwrap_err();
    assert!(matches!(err, StatsError::InputUnavailable { .. }));
}

#[test]
fn invalid_utf8_is_decoded_lossily() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    std::fs::write(&path, b"caf\xe9 ok").unwrap();
    let tally = WordStats::new(options("auto")).analyze_file(&path).unwrap();
    assert_eq!(tally.total(), 2);
}
