//! Chart sink: hands the series to an external display.
//!
//! The sink is a capability. When it is missing, the caller reports a
//! warning and carries on with text output.

use tracing::debug;

use super::Orientation;
use crate::stats::{Series, StatsError};
use crate::theme::Theme;
use crate::tui::ChartViewer;

/// One bar of an interactive chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

/// Chart data in display order.
pub fn chart_points(series: &Series) -> Vec<ChartPoint> {
    series
        .rows
        .iter()
        .map(|row| ChartPoint {
            label: row.label.clone(),
            value: row.count,
        })
        .collect()
}

/// Something that can display a chart.
pub trait ChartSink {
    /// Display `points`; blocks until the display is dismissed.
    fn show(&mut self, points: &[ChartPoint], orientation: Orientation) -> Result<(), StatsError>;
}

/// Full-screen chart in the controlling terminal.
#[derive(Debug, Clone)]
pub struct TerminalChart {
    theme: Theme,
}

impl TerminalChart {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Check if stdout can host the chart.
    pub fn available() -> bool {
        atty::is(atty::Stream::Stdout)
    }
}

impl Default for TerminalChart {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ChartSink for TerminalChart {
    fn show(&mut self, points: &[ChartPoint], orientation: Orientation) -> Result<(), StatsError> {
        if !Self::available() {
            return Err(StatsError::UnsupportedChartCapability(
                "stdout is not a terminal".to_string(),
            ));
        }
        debug!(bars = points.len(), %orientation, "Opening chart viewer");
        ChartViewer::new(points, orientation, &self.theme)
            .run()
            .map_err(|e| StatsError::UnsupportedChartCapability(e.to_string()))
    }
}
