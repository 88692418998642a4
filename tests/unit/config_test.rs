//! Unit tests for configuration loading and run resolution

use std::fs;

use clap::Parser;
use wordstats::cli::Cli;
use wordstats::config::{Config, RunConfig};
use wordstats::render::Orientation;
use wordstats::stats::StatsError;

#[test]
fn default_config_roundtrips_through_toml() {
    let config = Config::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
    assert!(text.contains("[display]"));
    assert!(text.contains("[processing]"));
}

#[test]
fn load_from_applies_sections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r##"
[display]
show_other = true
bar_width = 20
bar_char = "#"

[processing]
threads = 3
"##,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert!(config.display.show_other);
    assert_eq!(config.display.bar_width, 20);
    assert_eq!(config.processing.threads, 3);
    assert!(!config.processing.progress);
}

#[test]
fn load_from_rejects_invalid_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[processing]\nthreads = 0\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("processing.threads"));
}

#[test]
fn run_config_merges_file_and_flags() {
    let mut config = Config::default();
    config.display.bar_width = 30;
    config.processing.progress = true;
    let cli = Cli::try_parse_from(["wordstats", "-i", "x.txt", "-l", "1-4", "-g", "h", "--other"])
        .unwrap();

    let run = RunConfig::resolve(&cli, &config).unwrap();
    assert_eq!(run.report.bar_width, 30);
    assert_eq!(run.report.graph, Some(Orientation::Horizontal));
    assert!(run.stats.progress);
    assert!(run.stats.aggregate.show_other);
    assert_eq!(run.output, None);
}

#[test]
fn run_config_validates_before_reading_input() {
    // The input does not exist; validation must fail first.
    let cli = Cli::try_parse_from(["wordstats", "-i", "/nonexistent/in.txt", "-l", "5-", "--gui"])
        .unwrap();
    let err = RunConfig::resolve(&cli, &Config::default()).unwrap_err();
    assert!(matches!(
        err,
        StatsError::ConfigurationConflict(_) | StatsError::InvalidRangeFormat { .. }
    ));
}
