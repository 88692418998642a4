//! Interactive bar chart of the word length distribution
//!
//! Redraws on resize and closes on q, Esc or Ctrl-C.

use std::time::Duration;

use anyhow::Result;
use ratatui::{
    layout::{Direction, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block},
    Frame,
};

use super::app::App;
use super::event::Event;
use crate::render::{ChartPoint, Orientation};
use crate::theme::Theme;

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_BAR_WIDTH: u16 = 9;
const TITLE: &str = " Word Length Distribution ";
const HINT: &str = " q/Esc to close ";

/// Full-screen chart viewer
pub struct ChartViewer<'a> {
    points: &'a [ChartPoint],
    orientation: Orientation,
    theme: &'a Theme,
}

impl<'a> ChartViewer<'a> {
    pub fn new(points: &'a [ChartPoint], orientation: Orientation, theme: &'a Theme) -> Self {
        Self {
            points,
            orientation,
            theme,
        }
    }

    /// Show the chart until the user closes it.
    pub fn run(&self) -> Result<()> {
        let mut app = App::new(TICK_RATE)?;
        while !app.should_quit() {
            app.draw(|frame| {
                let area = frame.area();
                self.render(frame, area);
            })?;
            match app.next_event()? {
                Event::Quit => app.quit(),
                Event::Resize(..) | Event::Key(_) | Event::Tick => {}
            }
        }
        Ok(())
    }

    /// Draw the chart into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let values: Vec<u64> = self.points.iter().map(|p| p.value).collect();
        let colors = self.theme.rank_colors(&values);

        let bars: Vec<Bar> = self
            .points
            .iter()
            .zip(colors)
            .map(|(point, color)| {
                Bar::default()
                    .value(point.value)
                    .label(Line::from(point.label.clone()))
                    .style(Style::default().fg(color.unwrap_or(self.theme.text_secondary)))
            })
            .collect();

        let block = Block::bordered()
            .title(TITLE.fg(self.theme.accent).bold())
            .title_bottom(Line::from(HINT.fg(self.theme.text_secondary)).right_aligned())
            .border_style(Style::default().fg(self.theme.text_secondary));

        let (direction, bar_width) = match self.orientation {
            Orientation::Horizontal => (Direction::Horizontal, 1),
            Orientation::Vertical => (Direction::Vertical, self.column_width(area.width)),
        };

        let chart = BarChart::default()
            .block(block)
            .direction(direction)
            .bar_width(bar_width)
            .bar_gap(1)
            .value_style(Style::default().fg(self.theme.text_primary).reversed())
            .label_style(Style::default().fg(self.theme.text_primary))
            .data(BarGroup::default().bars(&bars));

        frame.render_widget(chart, area);
    }

    /// Widest column that fits every bar in `width`.
    fn column_width(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        let count = self.points.len().max(1) as u16;
        let per_bar = inner / count;
        per_bar.saturating_sub(1).clamp(1, MAX_BAR_WIDTH)
    }
}
