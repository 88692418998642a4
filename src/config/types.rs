//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
}

impl Config {
    /// Validate every section.
    pub fn validate(&self) -> Result<(), String> {
        self.display.validate()?;
        self.processing.validate()
    }
}

/// Report appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Color console output by count rank
    #[serde(default)]
    pub color: bool,
    /// Count words outside every range under "Other"
    #[serde(default)]
    pub show_other: bool,
    /// Length of the longest horizontal bar
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
    /// Rows of the tallest vertical bar
    #[serde(default = "default_chart_height")]
    pub chart_height: usize,
    /// Character bars are drawn with
    #[serde(default = "default_bar_char")]
    pub bar_char: String,
}

pub fn default_bar_width() -> usize {
    50
}

pub fn default_chart_height() -> usize {
    15
}

pub fn default_bar_char() -> String {
    "█".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: false,
            show_other: false,
            bar_width: default_bar_width(),
            chart_height: default_chart_height(),
            bar_char: default_bar_char(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=500).contains(&self.bar_width) {
            return Err(format!(
                "display.bar_width must be between 1 and 500, got {}",
                self.bar_width
            ));
        }
        if !(1..=200).contains(&self.chart_height) {
            return Err(format!(
                "display.chart_height must be between 1 and 200, got {}",
                self.chart_height
            ));
        }
        self.bar_char()?;
        Ok(())
    }

    /// The bar character, if `bar_char` holds exactly one.
    pub fn bar_char(&self) -> Result<char, String> {
        let mut chars = self.bar_char.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(format!(
                "display.bar_char must be a single character, got {:?}",
                self.bar_char
            )),
        }
    }
}

/// Counting behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Worker threads (1 = sequential)
    #[serde(default = "default_threads")]
    pub threads: usize,
    /// Show a progress line on stderr
    #[serde(default)]
    pub progress: bool,
    /// In auto mode, list every length up to the longest word
    #[serde(default)]
    pub fill_gaps: bool,
}

pub fn default_threads() -> usize {
    1
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            progress: false,
            fill_gaps: false,
        }
    }
}

impl ProcessingConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.threads == 0 {
            return Err("processing.threads must be at least 1".to_string());
        }
        Ok(())
    }
}
