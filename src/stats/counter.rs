//! Per-worker word classification.
//!
//! A `Counter` owns a private `PartialTally`. In explicit mode every token
//! lands in the first declared bucket containing its length, or in the
//! unmatched counter. In auto mode the counter simply tallies exact lengths;
//! buckets are created later by the aggregator.

use std::collections::BTreeMap;

use super::range::RangeSpec;
use super::tokenizer::WordToken;

/// Where a single token is counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Index into the declared buckets
    Bucket(usize),
    /// Exact length (auto mode)
    Length(usize),
    /// No declared bucket matched
    Unmatched,
}

/// Counts produced by one worker over one chunk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialTally {
    /// Counts per declared bucket, in declaration order
    pub by_bucket: Vec<u64>,
    /// Counts per exact length (auto mode only)
    pub by_length: BTreeMap<usize, u64>,
    /// Tokens that matched no declared bucket
    pub unmatched: u64,
    /// Every token seen
    pub tokens: u64,
}

impl PartialTally {
    /// Create an empty tally shaped for `spec`.
    pub fn for_spec(spec: &RangeSpec) -> Self {
        Self {
            by_bucket: vec![0; spec.buckets().len()],
            ..Default::default()
        }
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &PartialTally) {
        if self.by_bucket.len() < other.by_bucket.len() {
            self.by_bucket.resize(other.by_bucket.len(), 0);
        }
        for (total, count) in self.by_bucket.iter_mut().zip(&other.by_bucket) {
            *total += count;
        }
        for (&length, &count) in &other.by_length {
            *self.by_length.entry(length).or_insert(0) += count;
        }
        self.unmatched += other.unmatched;
        self.tokens += other.tokens;
    }

    /// Tokens that landed in a bucket or a length slot.
    pub fn classified(&self) -> u64 {
        self.tokens - self.unmatched
    }
}

/// Classifies tokens into a private tally.
#[derive(Debug)]
pub struct Counter<'a> {
    spec: &'a RangeSpec,
    tally: PartialTally,
}

impl<'a> Counter<'a> {
    /// Create a counter for `spec` with an empty tally.
    pub fn new(spec: &'a RangeSpec) -> Self {
        Self {
            spec,
            tally: PartialTally::for_spec(spec),
        }
    }

    /// Decide where a word of `length` characters is counted.
    pub fn classify(&self, length: usize) -> Slot {
        if self.spec.is_auto() {
            return Slot::Length(length);
        }
        match self.spec.first_match(length) {
            Some(index) => Slot::Bucket(index),
            None => Slot::Unmatched,
        }
    }

    /// Count one token.
    pub fn record(&mut self, token: WordToken) {
        self.tally.tokens += 1;
        match self.classify(token.length) {
            Slot::Bucket(index) => self.tally.by_bucket[index] += 1,
            Slot::Length(length) => *self.tally.by_length.entry(length).or_insert(0) += 1,
            Slot::Unmatched => self.tally.unmatched += 1,
        }
    }

    /// Count every token of an iterator.
    pub fn count<I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = WordToken>,
    {
        for token in tokens {
            self.record(token);
        }
    }

    /// Release the tally.
    pub fn finish(self) -> PartialTally {
        self.tally
    }
}
