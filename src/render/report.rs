//! Renderer selection and report output.
//!
//! A [`ReportPlan`] is built once from [`ReportSettings`] and then renders
//! every section from the same series. Text goes to the console (colored if
//! asked) and verbatim, without escape codes, to an optional file. The chart
//! sink runs last; when it is unavailable the report is still complete.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::horizontal::DEFAULT_BAR_WIDTH;
use super::vertical::DEFAULT_CHART_HEIGHT;
use super::{
    ChartPoint, ChartSink, HorizontalBar, Orientation, RenderStyle, Rendered, Renderer,
    TableRenderer, VerticalBar,
};
use crate::stats::{Series, StatsError};

/// Lines reserved around the vertical chart body (titles, axis, labels).
const VERTICAL_CHROME_ROWS: usize = 8;

/// What to render, resolved from CLI flags and configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// Text chart below the table
    pub graph: Option<Orientation>,
    /// Also open the interactive chart
    pub gui: bool,
    pub bar_width: usize,
    pub chart_height: usize,
    pub bar_char: char,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            graph: None,
            gui: false,
            bar_width: DEFAULT_BAR_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
            bar_char: '█',
        }
    }
}

impl ReportSettings {
    /// Reject combinations that cannot be rendered.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.gui && self.graph.is_none() {
            return Err(StatsError::ConfigurationConflict(
                "--gui requires a text chart mode as well (use --graph h or --graph v)"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// Rendered text of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    /// Text for the console, possibly with ANSI colors
    pub console: String,
    /// Same text without escape codes, for the file sink
    pub plain: String,
    /// Data for the chart sink, if requested
    pub chart: Option<(Vec<ChartPoint>, Orientation)>,
}

/// Result of a completed run of the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Recoverable problems, already logged
    pub warnings: Vec<String>,
    /// Whether the chart sink displayed the chart
    pub chart_shown: bool,
}

/// Ordered list of renderers to invoke.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportPlan {
    renderers: Vec<Renderer>,
}

impl ReportPlan {
    /// Build the plan, fitting charts to `terminal` (columns, rows) if known.
    pub fn from_settings(
        settings: &ReportSettings,
        terminal: Option<(usize, usize)>,
    ) -> Result<Self, StatsError> {
        settings.validate()?;

        let mut renderers = vec![Renderer::Table(TableRenderer)];
        match settings.graph {
            Some(Orientation::Horizontal) => {
                let cols = terminal.map(|(cols, _)| cols);
                renderers.push(Renderer::Horizontal(HorizontalBar::fitted(
                    settings.bar_width,
                    settings.bar_char,
                    cols,
                )));
            }
            Some(Orientation::Vertical) => {
                let height = match terminal {
                    Some((_, rows)) => settings
                        .chart_height
                        .min(rows.saturating_sub(VERTICAL_CHROME_ROWS)),
                    None => settings.chart_height,
                };
                renderers.push(Renderer::Vertical(VerticalBar::new(
                    height,
                    settings.bar_char,
                )));
            }
            None => {}
        }
        if let (true, Some(orientation)) = (settings.gui, settings.graph) {
            renderers.push(Renderer::Chart(orientation));
        }

        debug!(renderers = renderers.len(), "Report plan ready");
        Ok(Self { renderers })
    }

    pub fn renderers(&self) -> &[Renderer] {
        &self.renderers
    }

    /// Render every section of the report.
    pub fn render(&self, series: &Series, colors: bool) -> RenderedReport {
        let console_style = if colors {
            RenderStyle::colored()
        } else {
            RenderStyle::plain()
        };
        let plain_style = RenderStyle::plain();

        let mut console = Vec::new();
        let mut plain = Vec::new();
        let mut chart = None;
        for renderer in &self.renderers {
            match renderer.render(series, &console_style) {
                Rendered::Text(text) => {
                    if colors {
                        if let Rendered::Text(bare) = renderer.render(series, &plain_style) {
                            plain.push(bare);
                        }
                    } else {
                        plain.push(text.clone());
                    }
                    console.push(text);
                }
                Rendered::Chart(points, orientation) => chart = Some((points, orientation)),
            }
        }

        RenderedReport {
            console: join_sections(&console),
            plain: join_sections(&plain),
            chart,
        }
    }

    /// Render `series` and deliver it to the console, the file and the chart sink.
    ///
    /// Console and file failures are fatal. A missing chart capability is
    /// logged and returned as a warning.
    pub fn run(
        &self,
        series: &Series,
        colors: bool,
        console: &mut dyn Write,
        file: Option<&Path>,
        sink: &mut dyn ChartSink,
    ) -> Result<ReportOutcome, StatsError> {
        let report = self.render(series, colors);

        console
            .write_all(report.console.as_bytes())
            .and_then(|_| console.flush())
            .map_err(|source| StatsError::Output {
                path: PathBuf::from("<stdout>"),
                source,
            })?;

        if let Some(path) = file {
            std::fs::write(path, report.plain.as_bytes()).map_err(|source| {
                StatsError::Output {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            debug!(path = %path.display(), "Report written to file");
        }

        let mut outcome = ReportOutcome::default();
        if let Some((points, orientation)) = report.chart {
            match sink.show(&points, orientation) {
                Ok(()) => outcome.chart_shown = true,
                Err(err) if err.is_recoverable() => {
                    warn!("Skipping interactive chart: {}", err);
                    outcome.warnings.push(err.to_string());
                }
                Err(err) => return Err(err),
            }
        }
        Ok(outcome)
    }
}

fn join_sections(sections: &[String]) -> String {
    if sections.is_empty() {
        return String::new();
    }
    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}
