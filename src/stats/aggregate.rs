//! Merging partial tallies into the final report data.
//!
//! Bucket order is derived from the range specification (or from sorted
//! lengths in auto mode) after every partial tally has been summed, never
//! from the order in which workers finished.

use tracing::debug;

use super::counter::PartialTally;
use super::range::{Bucket, RangeSpec};

/// Above this maximum observed length, gap filling falls back to observed lengths.
pub const MAX_FILLED_LENGTH: usize = 1000;

/// Options that shape the final buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Count unmatched words under an "Other" bucket
    pub show_other: bool,
    /// Auto mode: include zero-count lengths between 1 and the longest word
    pub fill_gaps: bool,
}

/// A bucket together with its merged count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketCount {
    pub bucket: Bucket,
    pub count: u64,
}

/// Read-only result of merging every partial tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalTally {
    rows: Vec<BucketCount>,
    total: u64,
    unmatched: u64,
    tokens: u64,
}

/// One display row: label, count and share of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesRow {
    pub label: String,
    pub count: u64,
    pub percentage: f64,
}

/// The ordered rows every renderer consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Rows in display order
    pub rows: Vec<SeriesRow>,
    /// Words counted in the rows
    pub total: u64,
    /// Words dropped because no range matched and "other" is off
    pub unmatched: u64,
}

impl Series {
    /// Largest count of any row (0 when there are no rows).
    pub fn max_count(&self) -> u64 {
        self.rows.iter().map(|r| r.count).max().unwrap_or(0)
    }

    /// Check if there is nothing to display.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FinalTally {
    /// Buckets with counts, in display order.
    pub fn rows(&self) -> &[BucketCount] {
        &self.rows
    }

    /// Words counted in a bucket (the percentage denominator).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Words matching no range while "other" is disabled.
    pub fn unmatched(&self) -> u64 {
        self.unmatched
    }

    /// Every word seen in the input.
    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    /// Count for the bucket labelled `label`.
    pub fn count_of(&self, label: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| row.bucket.label == label)
            .map(|row| row.count)
    }

    /// Share of the total, in percent; 0 when the total is 0.
    pub fn percentage(&self, count: u64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.total as f64
        }
    }

    /// Display view consumed by renderers.
    pub fn series(&self) -> Series {
        Series {
            rows: self
                .rows
                .iter()
                .map(|row| SeriesRow {
                    label: row.bucket.label.clone(),
                    count: row.count,
                    percentage: self.percentage(row.count),
                })
                .collect(),
            total: self.total,
            unmatched: self.unmatched,
        }
    }
}

/// Merges partial tallies for one range specification.
#[derive(Debug)]
pub struct Aggregator<'a> {
    spec: &'a RangeSpec,
    options: AggregateOptions,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator.
    pub fn new(spec: &'a RangeSpec, options: AggregateOptions) -> Self {
        Self { spec, options }
    }

    /// Sum `partials` and derive the final buckets.
    pub fn merge<I>(&self, partials: I) -> FinalTally
    where
        I: IntoIterator<Item = PartialTally>,
    {
        let mut merged = PartialTally::for_spec(self.spec);
        let mut parts = 0usize;
        for partial in partials {
            merged.merge(&partial);
            parts += 1;
        }
        debug!(parts, tokens = merged.tokens, "merged partial tallies");

        let (rows, unmatched) = match self.spec {
            RangeSpec::Explicit(buckets) => self.explicit_rows(buckets, &merged),
            RangeSpec::Auto => (self.auto_rows(&merged), 0),
        };
        let total = rows.iter().map(|row| row.count).sum();

        FinalTally {
            rows,
            total,
            unmatched,
            tokens: merged.tokens,
        }
    }

    fn explicit_rows(&self, buckets: &[Bucket], merged: &PartialTally) -> (Vec<BucketCount>, u64) {
        let mut rows: Vec<BucketCount> = buckets
            .iter()
            .zip(&merged.by_bucket)
            .map(|(bucket, &count)| BucketCount {
                bucket: bucket.clone(),
                count,
            })
            .collect();

        if self.options.show_other && merged.unmatched > 0 {
            rows.push(BucketCount {
                bucket: Bucket::other(rows.len()),
                count: merged.unmatched,
            });
            (rows, 0)
        } else {
            (rows, merged.unmatched)
        }
    }

    fn auto_rows(&self, merged: &PartialTally) -> Vec<BucketCount> {
        let longest = merged.by_length.keys().next_back().copied().unwrap_or(0);

        if self.options.fill_gaps && longest <= MAX_FILLED_LENGTH {
            return (1..=longest)
                .enumerate()
                .map(|(ordinal, length)| BucketCount {
                    bucket: Bucket::length(ordinal, length),
                    count: merged.by_length.get(&length).copied().unwrap_or(0),
                })
                .collect();
        }

        merged
            .by_length
            .iter()
            .enumerate()
            .map(|(ordinal, (&length, &count))| BucketCount {
                bucket: Bucket::length(ordinal, length),
                count,
            })
            .collect()
    }
}
