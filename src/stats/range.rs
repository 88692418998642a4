//! Length range specification.
//!
//! A range string is either the literal `auto` or a comma separated list of
//! `min-max` segments (a bare `n` is shorthand for `n-n`). Ranges may overlap
//! or leave gaps; a word belongs to the first range that contains its length.

use std::fmt;
use std::str::FromStr;

use super::error::StatsError;

/// What a bucket stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    /// A user-declared `min-max` range
    Range,
    /// A single length discovered in auto mode
    Length,
    /// Words matching no declared range
    Other,
}

/// A classification target for word lengths.
///
/// Immutable once the range specification is parsed (or, in auto mode,
/// once aggregation has discovered the observed lengths).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Inclusive lower bound
    pub lower: usize,
    /// Inclusive upper bound (`usize::MAX` for the other bucket)
    pub upper: usize,
    /// Display label
    pub label: String,
    /// Position in display order
    pub ordinal: usize,
    /// Bucket category
    pub kind: BucketKind,
}

impl Bucket {
    /// A declared `lower-upper` range.
    pub fn range(ordinal: usize, lower: usize, upper: usize) -> Self {
        Self {
            lower,
            upper,
            label: format!("{}-{}", lower, upper),
            ordinal,
            kind: BucketKind::Range,
        }
    }

    /// A single exact length (auto mode).
    pub fn length(ordinal: usize, length: usize) -> Self {
        Self {
            lower: length,
            upper: length,
            label: length.to_string(),
            ordinal,
            kind: BucketKind::Length,
        }
    }

    /// The catch-all bucket for unmatched words.
    pub fn other(ordinal: usize) -> Self {
        Self {
            lower: 0,
            upper: usize::MAX,
            label: "Other".to_string(),
            ordinal,
            kind: BucketKind::Other,
        }
    }

    /// Check if a word length falls inside this bucket.
    pub fn contains(&self, length: usize) -> bool {
        self.lower <= length && length <= self.upper
    }

    /// Check if this is the catch-all bucket.
    pub fn is_other(&self) -> bool {
        self.kind == BucketKind::Other
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Parsed `--len` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSpec {
    /// Declared ranges in user order
    Explicit(Vec<Bucket>),
    /// One bucket per observed length, created at aggregation time
    Auto,
}

impl RangeSpec {
    /// Parse a range string such as `2-3,4-5` or `auto`.
    pub fn parse(spec: &str) -> Result<Self, StatsError> {
        let spec = spec.trim();
        if spec.is_empty() {
            return Err(StatsError::EmptyRangeList);
        }
        if spec == "auto" {
            return Ok(RangeSpec::Auto);
        }

        let buckets = spec
            .split(',')
            .enumerate()
            .map(|(ordinal, segment)| parse_segment(ordinal, segment))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RangeSpec::Explicit(buckets))
    }

    /// Check if buckets are deferred until lengths are known.
    pub fn is_auto(&self) -> bool {
        matches!(self, RangeSpec::Auto)
    }

    /// Declared buckets (empty in auto mode).
    pub fn buckets(&self) -> &[Bucket] {
        match self {
            RangeSpec::Explicit(buckets) => buckets,
            RangeSpec::Auto => &[],
        }
    }

    /// Index of the first declared bucket containing `length`.
    pub fn first_match(&self, length: usize) -> Option<usize> {
        self.buckets().iter().position(|b| b.contains(length))
    }
}

impl FromStr for RangeSpec {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RangeSpec::parse(s)
    }
}

/// Parse one comma separated segment.
fn parse_segment(ordinal: usize, segment: &str) -> Result<Bucket, StatsError> {
    let trimmed = segment.trim();
    let invalid = || StatsError::invalid_range(trimmed);

    let (lower, upper) = match trimmed.split_once('-') {
        Some((lo, hi)) => (
            parse_bound(lo).ok_or_else(invalid)?,
            parse_bound(hi).ok_or_else(invalid)?,
        ),
        None => {
            let exact = parse_bound(trimmed).ok_or_else(invalid)?;
            (exact, exact)
        }
    };

    if lower > upper {
        return Err(invalid());
    }
    Ok(Bucket::range(ordinal, lower, upper))
}

fn parse_bound(s: &str) -> Option<usize> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
