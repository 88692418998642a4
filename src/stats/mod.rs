//! Word length classification pipeline.
//!
//! Raw text flows through the stages below, leaves first:
//!
//! - [`tokenizer`] - splits text into words (boundary or delimiter mode)
//! - [`range`] - parses `--len` into ordered buckets, or `auto`
//! - [`counter`] - classifies words into a per-worker `PartialTally`
//! - [`partition`] - cuts input into separator-aligned chunks
//! - [`worker`] - counts chunks on a fixed-size Rayon pool
//! - [`progress`] - advisory byte progress from a shared atomic counter
//! - [`aggregate`] - merges tallies, orders buckets, computes percentages
//! - [`service`] - `WordStats` facade running the whole pipeline
//!
//! Partial tallies are private to their worker and merged once, after every
//! worker has finished, so the result is identical for any thread count.

pub mod aggregate;
pub mod counter;
pub mod error;
pub mod partition;
pub mod progress;
pub mod range;
pub mod service;
pub mod tokenizer;
pub mod worker;

pub use aggregate::{AggregateOptions, Aggregator, BucketCount, FinalTally, Series, SeriesRow};
pub use counter::{Counter, PartialTally, Slot};
pub use error::StatsError;
pub use partition::{partition, Chunk};
pub use progress::ProgressReporter;
pub use range::{Bucket, BucketKind, RangeSpec};
pub use service::{read_input, StatsOptions, WordStats};
pub use tokenizer::{tokenize, Delimiters, WordToken};
pub use worker::ParallelCounter;
