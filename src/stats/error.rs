//! Error type for the word statistics pipeline.
//!
//! Configuration and range errors are detected before any input is read.
//! Only `UnsupportedChartCapability` is recoverable: the run degrades to
//! skipping the chart sink while the text report still renders.

use std::path::PathBuf;

/// Errors that can occur while building or running a word length report.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Invalid range '{segment}'. Expected 'min-max' with min <= max (e.g. 2-3,4-5) or 'auto'")]
    InvalidRangeFormat { segment: String },

    #[error("Range list is empty. Use a list like 2-3,4-5 or 'auto'")]
    EmptyRangeList,

    #[error("Cannot read input file {path:?}: {source}")]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Chart display unavailable: {0}")]
    UnsupportedChartCapability(String),

    #[error("Invalid configuration: {0}")]
    ConfigurationConflict(String),

    #[error("Failed to start worker pool: {0}")]
    WorkerPool(String),

    #[error("Cannot write output file {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StatsError {
    /// Create an `InvalidRangeFormat` error for a segment.
    pub fn invalid_range(segment: impl Into<String>) -> Self {
        StatsError::InvalidRangeFormat {
            segment: segment.into(),
        }
    }

    /// Check if the run can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StatsError::UnsupportedChartCapability(_))
    }
}
