//! Settings for one run: config file values overridden by CLI flags.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::render::ReportSettings;
use crate::stats::{AggregateOptions, Delimiters, RangeSpec, StatsError, StatsOptions};
use crate::theme::console_colors;

use super::types::Config;

/// Fully resolved and validated run settings.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub stats: StatsOptions,
    pub report: ReportSettings,
    /// Color console output
    pub colors: bool,
}

impl RunConfig {
    /// Merge `cli` over `config` and validate the result.
    ///
    /// Every check happens here, before the input is opened.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self, StatsError> {
        let threads = cli.threads.unwrap_or(config.processing.threads);
        if threads == 0 {
            return Err(StatsError::ConfigurationConflict(
                "thread count must be at least 1".to_string(),
            ));
        }

        let bar_char = config
            .display
            .bar_char()
            .map_err(StatsError::ConfigurationConflict)?;
        let report = ReportSettings {
            graph: cli.graph,
            gui: cli.gui,
            bar_width: config.display.bar_width,
            chart_height: config.display.chart_height,
            bar_char,
        };
        report.validate()?;

        let spec = RangeSpec::parse(&cli.ranges)?;
        let stats = StatsOptions {
            spec,
            delimiters: Delimiters::from_option(cli.delimiters.as_deref()),
            threads,
            progress: cli.progress || config.processing.progress,
            aggregate: AggregateOptions {
                show_other: cli.other || config.display.show_other,
                fill_gaps: cli.fill_gaps || config.processing.fill_gaps,
            },
        };

        Ok(Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            stats,
            report,
            colors: console_colors(cli.color || config.display.color),
        })
    }
}
