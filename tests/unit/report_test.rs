//! Unit tests for report rendering from a real tally

use wordstats::render::{
    ChartPoint, ChartSink, Orientation, ReportPlan, ReportSettings, Renderer,
};
use wordstats::stats::StatsError;

use crate::helpers::{analyze, options};

struct Headless;

impl ChartSink for Headless {
    fn show(&mut self, _: &[ChartPoint], _: Orientation) -> Result<(), StatsError> {
        Err(StatsError::UnsupportedChartCapability("headless".into()))
    }
}

fn plan(graph: Option<Orientation>, gui: bool) -> ReportPlan {
    let settings = ReportSettings {
        graph,
        gui,
        ..ReportSettings::default()
    };
    ReportPlan::from_settings(&settings, None).unwrap()
}

#[test]
fn table_of_scenario_tally() {
    let series = analyze(options("3-3,4-10"), "cat dog elephant").series();
    let report = plan(None, false).render(&series, false);
    assert!(report.console.contains("3-3                  2                66.67%"));
    assert!(report.console.contains("4-10                 1                33.33%"));
    assert!(report.chart.is_none());
}

#[test]
fn every_renderer_sees_the_same_series() {
    let series = analyze(options("1-2,3-4"), "a bb ccc dddd eeee").series();
    let report = plan(Some(Orientation::Horizontal), true).render(&series, false);

    let (points, orientation) = report.chart.unwrap();
    assert_eq!(orientation, Orientation::Horizontal);
    assert_eq!(
        points,
        vec![
            ChartPoint {
                label: "1-2".into(),
                value: 2
            },
            ChartPoint {
                label: "3-4".into(),
                value: 3
            },
        ]
    );
    assert!(report.console.contains("3-4             3"));
}

#[test]
fn headless_chart_keeps_text_report() {
    let series = analyze(options("auto"), "to be or not").series();
    let mut out = Vec::new();
    let outcome = plan(Some(Orientation::Vertical), true)
        .run(&series, false, &mut out, None, &mut Headless)
        .unwrap();

    assert_eq!(outcome.warnings.len(), 1);
    assert!(!outcome.chart_shown);
    let out = String::from_utf8(out).unwrap();
    assert!(out.contains("Word Length Statistics"));
    assert!(out.contains("Vertical Bar Graph"));
}

#[test]
fn plan_lists_renderers_in_order() {
    let plan = plan(Some(Orientation::Vertical), false);
    assert_eq!(plan.renderers().len(), 2);
    assert!(matches!(plan.renderers()[0], Renderer::Table(_)));
    assert!(matches!(plan.renderers()[1], Renderer::Vertical(_)));
}
