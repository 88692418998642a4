//! Horizontal bar chart: one bar per bucket, scaled to the largest count.

use crate::stats::Series;
use crate::theme::paint;

use super::{label_width, pad, RenderStyle};

const LABEL_WIDTH: usize = 15;
const COUNT_WIDTH: usize = 10;
/// Narrowest bar area, even on tiny terminals.
pub const MIN_BAR_WIDTH: usize = 10;
/// Default length of the longest bar.
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Horizontal bar renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizontalBar {
    /// Length of the longest bar in characters
    pub bar_width: usize,
    /// Character bars are drawn with
    pub bar_char: char,
}

impl Default for HorizontalBar {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            bar_char: '█',
        }
    }
}

impl HorizontalBar {
    /// Create a renderer with `bar_width` bounded by the terminal width.
    pub fn fitted(bar_width: usize, bar_char: char, terminal_cols: Option<usize>) -> Self {
        let fixed = LABEL_WIDTH + COUNT_WIDTH + 2;
        let bar_width = match terminal_cols {
            Some(cols) => bar_width.min(cols.saturating_sub(fixed)),
            None => bar_width,
        };
        Self {
            bar_width: bar_width.max(MIN_BAR_WIDTH),
            bar_char,
        }
    }

    /// Bar length for `count`, proportional to `max`.
    pub fn bar_len(&self, count: u64, max: u64) -> usize {
        if max == 0 {
            return 0;
        }
        (count as u128 * self.bar_width as u128 / max as u128) as usize
    }

    /// Render `series` as horizontal bars.
    pub fn render(&self, series: &Series, style: &RenderStyle) -> String {
        let label_w = label_width(series, LABEL_WIDTH);
        let rule_w = label_w + COUNT_WIDTH + 2 + self.bar_width;
        let heavy = "=".repeat(rule_w);
        let max = series.max_count();
        let colors = style.row_colors(series);

        let mut lines = vec![
            heavy.clone(),
            "Horizontal Bar Graph".to_string(),
            heavy.clone(),
            format!(
                "{} {} Bar",
                pad("Length Range", label_w),
                pad("Count", COUNT_WIDTH)
            ),
            "-".repeat(rule_w),
        ];

        for (row, color) in series.rows.iter().zip(colors) {
            let bar: String = std::iter::repeat(self.bar_char)
                .take(self.bar_len(row.count, max))
                .collect();
            let line = format!(
                "{} {} {}",
                pad(&row.label, label_w),
                pad(&row.count.to_string(), COUNT_WIDTH),
                bar
            );
            lines.push(paint(line.trim_end(), color));
        }
        lines.push(heavy);

        lines.join("\n")
    }
}
