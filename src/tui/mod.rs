//! Terminal UI for the interactive chart
//!
//! Uses ratatui/crossterm to show the distribution full-screen. Only the
//! chart sink reaches this module.

pub mod app;
pub mod chart_view;
pub mod event;

pub use chart_view::ChartViewer;
