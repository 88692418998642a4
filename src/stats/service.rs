//! `WordStats` facade orchestrating the counting pipeline.
//!
//! # Workflow
//!
//! 1. Read the input file (lossy UTF-8 decoding)
//! 2. Partition and count with the configured number of workers
//! 3. Report progress, if enabled
//! 4. Merge partial tallies into a `FinalTally`

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use super::aggregate::{AggregateOptions, Aggregator, FinalTally};
use super::error::StatsError;
use super::progress::ProgressReporter;
use super::range::RangeSpec;
use super::tokenizer::Delimiters;
use super::worker::ParallelCounter;

/// Options for one counting run.
#[derive(Debug, Clone)]
pub struct StatsOptions {
    /// Length buckets
    pub spec: RangeSpec,
    /// Word separation mode
    pub delimiters: Delimiters,
    /// Number of workers (1 = sequential)
    pub threads: usize,
    /// Print progress to stderr
    pub progress: bool,
    /// Bucket shaping
    pub aggregate: AggregateOptions,
}

impl StatsOptions {
    /// Create options for `spec` with defaults for everything else.
    pub fn with_spec(spec: RangeSpec) -> Self {
        Self {
            spec,
            delimiters: Delimiters::Boundary,
            threads: 1,
            progress: false,
            aggregate: AggregateOptions::default(),
        }
    }

    /// Set the delimiter mode.
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Set the worker count.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Enable progress output.
    pub fn progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    /// Count unmatched words under "Other".
    pub fn show_other(mut self, enabled: bool) -> Self {
        self.aggregate.show_other = enabled;
        self
    }

    /// Fill length gaps in auto mode.
    pub fn fill_gaps(mut self, enabled: bool) -> Self {
        self.aggregate.fill_gaps = enabled;
        self
    }
}

/// Runs the word length pipeline.
#[derive(Debug, Clone)]
pub struct WordStats {
    options: StatsOptions,
}

impl WordStats {
    /// Create a new pipeline.
    pub fn new(options: StatsOptions) -> Self {
        Self { options }
    }

    /// Read `path` and count its words.
    pub fn analyze_file(&self, path: &Path) -> Result<FinalTally, StatsError> {
        let text = read_input(path)?;
        info!(
            path = %path.display(),
            size = %humansize::format_size(text.len() as u64, humansize::BINARY),
            "read input"
        );
        if self.options.progress {
            let reporter = ProgressReporter::stderr(text.len() as u64);
            self.analyze_with(&text, Some(&reporter))
        } else {
            self.analyze_with(&text, None)
        }
    }

    /// Count the words of in-memory text.
    pub fn analyze_text(&self, text: &str) -> Result<FinalTally, StatsError> {
        self.analyze_with(text, None)
    }

    /// Count `text`, reporting consumed bytes to `progress`.
    pub fn analyze_with(
        &self,
        text: &str,
        progress: Option<&ProgressReporter>,
    ) -> Result<FinalTally, StatsError> {
        let mut counter =
            ParallelCounter::new(&self.options.spec, &self.options.delimiters, self.options.threads);
        if let Some(reporter) = progress {
            counter = counter.with_progress(reporter);
        }

        let partials = counter.count(text)?;
        if let Some(reporter) = progress {
            reporter.finish();
        }

        let tally = Aggregator::new(&self.options.spec, self.options.aggregate).merge(partials);
        debug!(
            buckets = tally.rows().len(),
            total = tally.total(),
            unmatched = tally.unmatched(),
            "aggregation complete"
        );
        Ok(tally)
    }
}

/// Read an input file as text, replacing invalid UTF-8.
pub fn read_input(path: &Path) -> Result<String, StatsError> {
    let bytes = fs::read(path).map_err(|source| StatsError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!(path = %path.display(), "input is not valid UTF-8; invalid sequences replaced");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}
