//! Vertical bar chart: columns grow upward, labels beneath.

use unicode_width::UnicodeWidthStr;

use crate::stats::Series;
use crate::theme::paint;

use super::{pad, RenderStyle};

const RULE_WIDTH: usize = 50;
const MIN_COLUMN_WIDTH: usize = 2;
const INDENT: &str = "  ";
/// Default number of rows for the tallest column.
pub const DEFAULT_CHART_HEIGHT: usize = 15;

/// Vertical bar renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerticalBar {
    /// Rows of the tallest column
    pub chart_height: usize,
    /// Character columns are drawn with
    pub bar_char: char,
}

impl Default for VerticalBar {
    fn default() -> Self {
        Self {
            chart_height: DEFAULT_CHART_HEIGHT,
            bar_char: '█',
        }
    }
}

impl VerticalBar {
    pub fn new(chart_height: usize, bar_char: char) -> Self {
        Self {
            chart_height: chart_height.max(1),
            bar_char,
        }
    }

    /// Rows actually drawn: never taller than the largest count.
    pub fn rows_for(&self, max: u64) -> usize {
        (self.chart_height as u64).min(max) as usize
    }

    /// Column height for `count` within `rows` rows.
    ///
    /// Non-zero counts always get at least one cell.
    pub fn column_height(count: u64, max: u64, rows: usize) -> usize {
        if count == 0 || max == 0 {
            return 0;
        }
        let scaled = (count as u128 * rows as u128 / max as u128) as usize;
        scaled.max(1)
    }

    /// Render `series` as vertical bars.
    pub fn render(&self, series: &Series, style: &RenderStyle) -> String {
        let heavy = "=".repeat(RULE_WIDTH);
        let mut lines = vec![heavy.clone(), "Vertical Bar Graph".to_string(), heavy.clone()];

        if series.is_empty() {
            lines.push("(no buckets to display)".to_string());
            lines.push(heavy);
            return lines.join("\n");
        }

        let col_w = series
            .rows
            .iter()
            .map(|r| UnicodeWidthStr::width(r.label.as_str()))
            .max()
            .unwrap_or(0)
            .max(MIN_COLUMN_WIDTH);
        let max = series.max_count();
        let rows = self.rows_for(max);
        let colors = style.row_colors(series);
        let heights: Vec<usize> = series
            .rows
            .iter()
            .map(|r| Self::column_height(r.count, max, rows))
            .collect();
        let filled: String = std::iter::repeat(self.bar_char).take(col_w).collect();
        let blank = " ".repeat(col_w);

        for level in (1..=rows).rev() {
            let mut cells: Vec<String> = heights
                .iter()
                .zip(&colors)
                .map(|(height, color)| {
                    if *height >= level {
                        paint(&filled, *color)
                    } else {
                        blank.clone()
                    }
                })
                .collect();
            while cells.last().is_some_and(|c| c.trim().is_empty()) {
                cells.pop();
            }
            lines.push(format!("{}{}", INDENT, cells.join(" ")).trim_end().to_string());
        }

        let span = series.rows.len() * (col_w + 1) - 1;
        lines.push(format!("{}{}", INDENT, "-".repeat(span)));
        let labels: Vec<String> = series.rows.iter().map(|r| pad(&r.label, col_w)).collect();
        lines.push(format!("{}{}", INDENT, labels.join(" ")).trim_end().to_string());
        let counts: Vec<String> = series
            .rows
            .iter()
            .map(|r| pad(&r.count.to_string(), col_w))
            .collect();
        lines.push(format!("{}{}", INDENT, counts.join(" ")).trim_end().to_string());
        lines.push(heavy);

        lines.join("\n")
    }
}
