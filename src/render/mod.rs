//! Rendering of the word length series.
//!
//! Every renderer consumes the same [`Series`](crate::stats::Series); none of
//! them re-derives counts. Renderers are selected once from configuration
//! into a [`ReportPlan`] and invoked in order.
//!
//! - [`table`] - fixed-width table with a total row
//! - [`horizontal`] - one proportional bar per line
//! - [`vertical`] - stacked rows with labels beneath
//! - [`chart`] - interactive chart sink (external capability)
//! - [`report`] - renderer selection, console and file output

pub mod chart;
pub mod horizontal;
pub mod report;
pub mod table;
pub mod vertical;

use std::fmt;
use std::str::FromStr;

use unicode_width::UnicodeWidthStr;

use crate::stats::Series;
use crate::theme::Theme;

pub use chart::{chart_points, ChartPoint, ChartSink, TerminalChart};
pub use horizontal::HorizontalBar;
pub use report::{RenderedReport, ReportOutcome, ReportPlan, ReportSettings};
pub use table::TableRenderer;
pub use vertical::VerticalBar;

/// Bar direction for text and interactive charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "horizontal" => Ok(Orientation::Horizontal),
            "v" | "vertical" => Ok(Orientation::Vertical),
            other => Err(format!("unknown graph mode '{}' (use h or v)", other)),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "h"),
            Orientation::Vertical => write!(f, "v"),
        }
    }
}

/// Console styling applied while rendering.
#[derive(Debug, Clone, Default)]
pub struct RenderStyle {
    /// Emit ANSI colors by count rank
    pub colors: bool,
    /// Palette source
    pub theme: Theme,
}

impl RenderStyle {
    /// Plain output, as written to files.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Colored console output.
    pub fn colored() -> Self {
        Self {
            colors: true,
            ..Self::default()
        }
    }

    /// Per-row colors, or all `None` when colors are off.
    pub(crate) fn row_colors(&self, series: &Series) -> Vec<Option<ratatui::style::Color>> {
        if !self.colors {
            return vec![None; series.rows.len()];
        }
        let counts: Vec<u64> = series.rows.iter().map(|r| r.count).collect();
        self.theme.rank_colors(&counts)
    }
}

/// Output of one renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// A text section for the console and file sinks
    Text(String),
    /// Data for the chart sink
    Chart(Vec<ChartPoint>, Orientation),
}

/// The set of available renderers.
#[derive(Debug, Clone, PartialEq)]
pub enum Renderer {
    Table(TableRenderer),
    Horizontal(HorizontalBar),
    Vertical(VerticalBar),
    Chart(Orientation),
}

impl Renderer {
    /// Render `series`.
    pub fn render(&self, series: &Series, style: &RenderStyle) -> Rendered {
        match self {
            Renderer::Table(table) => Rendered::Text(table.render(series, style)),
            Renderer::Horizontal(bar) => Rendered::Text(bar.render(series, style)),
            Renderer::Vertical(bar) => Rendered::Text(bar.render(series, style)),
            Renderer::Chart(orientation) => Rendered::Chart(chart_points(series), *orientation),
        }
    }
}

/// Left-align `text` to `width` display columns.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let shown = UnicodeWidthStr::width(text);
    if shown >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - shown))
    }
}

/// Widest label in display columns, at least `min`.
pub(crate) fn label_width(series: &Series, min: usize) -> usize {
    series
        .rows
        .iter()
        .map(|r| UnicodeWidthStr::width(r.label.as_str()))
        .max()
        .unwrap_or(0)
        .max(min)
}

/// Current terminal size (columns, rows), if stdout is a terminal.
pub fn terminal_geometry() -> Option<(usize, usize)> {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), terminal_size::Height(h))| (w as usize, h as usize))
}
