//! Parallel counting using a fixed-size Rayon pool.
//!
//! With one thread the whole input is counted on the calling thread. With
//! more, the input is partitioned into separator-aligned chunks and each
//! chunk is tokenized and counted by one worker into its own tally. Tallies
//! come back in chunk order, so merging does not depend on completion order.

use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use tracing::{debug, trace};

use super::counter::{Counter, PartialTally};
use super::error::StatsError;
use super::partition::{partition, Chunk};
use super::progress::ProgressReporter;
use super::range::RangeSpec;
use super::tokenizer::{tokenize, Delimiters};

/// Tokens counted between progress updates.
const PROGRESS_EVERY_TOKENS: usize = 4096;

/// Count the words of a single chunk into a fresh tally.
pub fn count_chunk(
    chunk: &Chunk<'_>,
    spec: &RangeSpec,
    delimiters: &Delimiters,
    progress: Option<&ProgressReporter>,
) -> PartialTally {
    let mut counter = Counter::new(spec);
    let mut tokens = tokenize(chunk.text, delimiters);
    let mut reported = 0usize;
    let mut pending = 0usize;

    while let Some(token) = tokens.next() {
        counter.record(token);
        pending += 1;
        if pending == PROGRESS_EVERY_TOKENS {
            if let Some(reporter) = progress {
                let position = tokens.position();
                reporter.advance((position - reported) as u64);
                reported = position;
            }
            pending = 0;
        }
    }
    if let Some(reporter) = progress {
        reporter.advance((chunk.len() - reported) as u64);
    }

    let tally = counter.finish();
    trace!(
        chunk = chunk.id,
        offset = chunk.offset,
        bytes = chunk.len(),
        tokens = tally.tokens,
        "chunk counted"
    );
    tally
}

/// Counts an input with a configurable number of workers.
pub struct ParallelCounter<'a> {
    spec: &'a RangeSpec,
    delimiters: &'a Delimiters,
    threads: usize,
    progress: Option<&'a ProgressReporter>,
}

impl<'a> ParallelCounter<'a> {
    /// Create a counter using `threads` workers (values below 1 mean 1).
    pub fn new(spec: &'a RangeSpec, delimiters: &'a Delimiters, threads: usize) -> Self {
        Self {
            spec,
            delimiters,
            threads: threads.max(1),
            progress: None,
        }
    }

    /// Report consumed bytes to `reporter`.
    pub fn with_progress(mut self, reporter: &'a ProgressReporter) -> Self {
        self.progress = Some(reporter);
        self
    }

    /// Number of workers this counter will use.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Count `text`, returning one tally per chunk in input order.
    ///
    /// A panicking worker fails the whole run with `WorkerPool`; partial
    /// tallies are never returned. This holds for the sequential path too.
    pub fn count(&self, text: &str) -> Result<Vec<PartialTally>, StatsError> {
        if self.threads == 1 {
            let whole = Chunk {
                id: 0,
                offset: 0,
                text,
            };
            return guard(|| vec![count_chunk(&whole, self.spec, self.delimiters, self.progress)]);
        }

        let chunks = partition(text, self.threads, self.delimiters);
        debug!(
            threads = self.threads,
            chunks = chunks.len(),
            "counting in parallel"
        );

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("wordstats-worker-{}", i))
            .build()
            .map_err(|e| StatsError::WorkerPool(e.to_string()))?;

        guard(|| {
            pool.install(|| {
                chunks
                    .par_iter()
                    .map(|chunk| count_chunk(chunk, self.spec, self.delimiters, self.progress))
                    .collect::<Vec<_>>()
            })
        })
    }
}

/// Run `work`, turning a panic into `StatsError::WorkerPool`.
fn guard<F>(work: F) -> Result<Vec<PartialTally>, StatsError>
where
    F: FnOnce() -> Vec<PartialTally>,
{
    panic::catch_unwind(AssertUnwindSafe(work))
        .map_err(|_| StatsError::WorkerPool("a counting worker panicked".to_string()))
}
