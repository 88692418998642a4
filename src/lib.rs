//! Word length statistics
//!
//! Counts the words of a text by length, buckets them into ranges and
//! renders the distribution as a table, text bar charts or an interactive
//! chart.
//!
//! ```
//! use wordstats::stats::{RangeSpec, StatsOptions, WordStats};
//!
//! let spec = RangeSpec::parse("3-3,4-10").unwrap();
//! let tally = WordStats::new(StatsOptions::with_spec(spec))
//!     .analyze_text("cat dog elephant")
//!     .unwrap();
//! assert_eq!(tally.count_of("3-3"), Some(2));
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod render;
pub mod stats;
pub mod theme;
pub mod tui;

pub use config::{Config, RunConfig};
pub use render::{ReportPlan, ReportSettings};
pub use stats::{FinalTally, RangeSpec, StatsError, StatsOptions, WordStats};
