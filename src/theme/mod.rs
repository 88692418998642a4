//! Theme configuration for charts and CLI output
//!
//! Centralizes all color definitions. Colors are ratatui colors so the same
//! palette drives the interactive chart (TUI) and ANSI console output (CLI).

use ratatui::style::Color;

pub mod cli;

pub use cli::{build_cli_styles, color_to_ansi, console_colors, paint, ANSI_RESET};

/// Bar colors by rank: the highest count gets the first color.
pub const RANK_PALETTE: [Color; 6] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightMagenta,
    Color::White,
];

/// Theme configuration for the chart viewer and CLI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for titles and borders
    pub accent: Color,
    /// Rank palette for bars
    pub palette: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightGreen,
            palette: RANK_PALETTE.to_vec(),
        }
    }
}

impl Theme {
    /// Color for the bucket of `rank` (0 = highest count), cycling the palette.
    pub fn rank_color(&self, rank: usize) -> Color {
        if self.palette.is_empty() {
            return self.text_primary;
        }
        self.palette[rank % self.palette.len()]
    }

    /// Color of each bucket, by rank of its count.
    ///
    /// Buckets are ranked by descending count; ties keep display order.
    /// Zero-count buckets get no color.
    pub fn rank_colors(&self, counts: &[u64]) -> Vec<Option<Color>> {
        let mut order: Vec<usize> = (0..counts.len()).collect();
        order.sort_by(|&a, &b| counts[b].cmp(&counts[a]));

        let mut colors = vec![None; counts.len()];
        for (rank, index) in order.into_iter().enumerate() {
            if counts[index] > 0 {
                colors[index] = Some(self.rank_color(rank));
            }
        }
        colors
    }
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}
