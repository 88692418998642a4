//! Fixed-width statistics table.

use crate::stats::Series;
use crate::theme::paint;

use super::{label_width, pad, RenderStyle};

const LABEL_WIDTH: usize = 20;
const COUNT_WIDTH: usize = 15;
const RULE_WIDTH: usize = 60;

/// Renders label, count and percentage columns with a total row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRenderer;

impl TableRenderer {
    /// Render `series` as a table.
    pub fn render(&self, series: &Series, style: &RenderStyle) -> String {
        let label_w = label_width(series, LABEL_WIDTH);
        let rule_w = RULE_WIDTH.max(label_w + COUNT_WIDTH + 9);
        let heavy = "=".repeat(rule_w);
        let light = "-".repeat(rule_w);
        let colors = style.row_colors(series);

        let mut lines = vec![
            heavy.clone(),
            "Word Length Statistics".to_string(),
            heavy.clone(),
            format!(
                "{} {} {}",
                pad("Length Range", label_w),
                pad("Count", COUNT_WIDTH),
                "Percentage"
            ),
            light.clone(),
        ];

        for (row, color) in series.rows.iter().zip(colors) {
            let line = format!(
                "{} {} {:>6.2}%",
                pad(&row.label, label_w),
                pad(&row.count.to_string(), COUNT_WIDTH),
                row.percentage
            );
            lines.push(paint(&line, color));
        }

        let total_pct = if series.total > 0 { 100.0 } else { 0.0 };
        lines.push(light);
        lines.push(format!(
            "{} {} {:>6.2}%",
            pad("Total", label_w),
            pad(&series.total.to_string(), COUNT_WIDTH),
            total_pct
        ));
        if series.unmatched > 0 {
            lines.push(format!(
                "({} word{} outside all ranges not counted; use --other to include)",
                series.unmatched,
                if series.unmatched == 1 { "" } else { "s" }
            ));
        }
        lines.push(heavy);

        lines.join("\n")
    }
}
