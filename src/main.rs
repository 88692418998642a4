//! wordstats - CLI entry point

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use wordstats::cli::Cli;
use wordstats::render::{terminal_geometry, ReportPlan, TerminalChart};
use wordstats::theme::current_theme;
use wordstats::{Config, RunConfig, WordStats};

fn main() -> Result<()> {
    let cli = Cli::parse();
    wordstats::logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let run = RunConfig::resolve(&cli, &config)?;
    let plan = ReportPlan::from_settings(&run.report, terminal_geometry())?;
    debug!(?run, "Resolved run configuration");

    let tally = WordStats::new(run.stats.clone())
        .analyze_file(&run.input)
        .with_context(|| format!("Failed to analyze {}", run.input.display()))?;
    let series = tally.series();

    let mut stdout = io::stdout().lock();
    let mut chart = TerminalChart::new(current_theme());
    plan.run(
        &series,
        run.colors,
        &mut stdout,
        run.output.as_deref(),
        &mut chart,
    )?;

    Ok(())
}
