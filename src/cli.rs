//! CLI definitions for wordstats
//!
//! Kept apart from main.rs so xtask can generate the man page and Markdown
//! reference from the same clap structure.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::render::Orientation;
use crate::theme::build_cli_styles;

#[derive(Debug, Parser)]
#[command(name = "wordstats")]
#[command(about = "Word length statistics for text files")]
#[command(
    long_about = "wordstats - count the words of a text file by length.

Words are bucketed into length ranges and reported as a table, optionally
followed by a horizontal or vertical bar chart and an interactive chart.

EXAMPLES:
    wordstats -i book.txt -l 1-3,4-6,7-20        Table of three ranges
    wordstats -i book.txt -l auto -g h           One row per length, with bars
    wordstats -i words.txt -l auto -d ' ' --other  Dictionary file, one word per line
    wordstats -i book.txt -l 1-5 -g v --gui      Also open the interactive chart
    wordstats -i book.txt -l auto -t 4 --pb      Four workers with progress

CONFIGURATION:
    Defaults are read from ~/.config/wordstats/config.toml ([display] and
    [processing] sections). Command line flags take precedence."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Input text file
    #[arg(short = 'i', long = "input", visible_alias = "in", value_name = "FILE")]
    pub input: PathBuf,

    /// Length ranges: 'min-max' list (e.g. 1-3,4-6), single lengths, or 'auto'
    #[arg(short = 'l', long = "len", value_name = "RANGES")]
    pub ranges: String,

    /// Also write the report (without colors) to this file
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Characters that separate words (a space splits on any whitespace)
    #[arg(short = 'd', long = "delim", value_name = "CHARS")]
    pub delimiters: Option<String>,

    /// Text chart below the table: h (horizontal) or v (vertical)
    #[arg(short = 'g', long = "graph", value_name = "MODE", value_parser = parse_orientation)]
    pub graph: Option<Orientation>,

    /// Open the interactive chart (requires --graph)
    #[arg(long)]
    pub gui: bool,

    /// Color rows by count rank
    #[arg(long)]
    pub color: bool,

    /// Count words outside every range under "Other"
    #[arg(long)]
    pub other: bool,

    /// Worker threads
    #[arg(short = 't', long = "threads", value_name = "N")]
    pub threads: Option<usize>,

    /// Show progress on stderr
    #[arg(long = "pb", visible_alias = "progress")]
    pub progress: bool,

    /// In auto mode, list every length up to the longest word
    #[arg(long)]
    pub fill_gaps: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

fn parse_orientation(value: &str) -> Result<Orientation, String> {
    value.parse()
}
