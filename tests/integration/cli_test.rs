//! End-to-end runs of the binary

use predicates::prelude::*;

use crate::helpers::Workspace;

#[test]
fn counts_explicit_ranges() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "cat dog elephant\n");

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "3-3,4-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3-3                  2                66.67%"))
        .stdout(predicate::str::contains("4-10                 1                33.33%"))
        .stdout(predicate::str::contains("Total                3               100.00%"));
}

#[test]
fn auto_ranges_with_delimiter() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "a;bb;ccc");

    ws.cmd()
        .arg("--in")
        .arg(&input)
        .args(["--len", "auto", "-d", ";"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1                    1"))
        .stdout(predicate::str::contains("2                    1"))
        .stdout(predicate::str::contains("3                    1"));
}

#[test]
fn unbounded_range_fails() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "words here");

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "11-"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid range '11-'"));
}

#[test]
fn empty_input_reports_zero() {
    let ws = Workspace::new();
    let input = ws.write("empty.txt", "");

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "1-5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1-5                  0                 0.00%"));
}

#[test]
fn gui_without_graph_is_rejected_before_reading() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["-i", "does-not-exist.txt", "-l", "1-5", "--gui"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--gui requires"));
}

#[test]
fn missing_input_fails() {
    let ws = Workspace::new();

    ws.cmd()
        .args(["-i", "nope.txt", "-l", "1-5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot read input file"));
}

#[test]
fn gui_without_terminal_warns_and_keeps_report() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "one two three four");

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "auto", "-g", "v", "--gui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vertical Bar Graph"))
        .stderr(predicate::str::contains("Skipping interactive chart"));
}

#[test]
fn threads_do_not_change_results() {
    let ws = Workspace::new();
    let text = "the quick brown fox jumps over the lazy dog\n".repeat(2_000);
    let input = ws.write("in.txt", &text);

    let run = |threads: &str| {
        ws.cmd()
            .arg("-i")
            .arg(&input)
            .args(["-l", "1-3,4-5,6-9", "--other", "-t", threads])
            .output()
            .expect("binary runs")
            .stdout
    };

    assert_eq!(run("1"), run("4"));
}

#[test]
fn other_bucket_and_footnote() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "a bb ccc dddd");

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "2-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 words outside all ranges"));

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "2-3", "--other"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Other                2                50.00%"));
}

#[test]
fn progress_goes_to_stderr() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", &"word ".repeat(10_000));

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "auto", "--pb"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Progress: 100.0%"))
        .stdout(predicate::str::contains("Progress").not());
}

#[test]
fn config_file_sets_defaults() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "a bb ccc dddd");
    let config = ws.write("custom.toml", "[display]\nshow_other = true\n");

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "2-3", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Other"));
}

#[test]
fn default_config_location_is_used() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "a bb ccc dddd");
    ws.write(".config/wordstats/config.toml", "[processing]\nthreads = 0\n");

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "2-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("processing.threads"));
}

#[test]
fn horizontal_graph_follows_table() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "aa bb c");

    let out = ws
        .cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "auto", "-g", "h"])
        .output()
        .expect("binary runs");
    let stdout = String::from_utf8(out.stdout).unwrap();
    let table = stdout.find("Word Length Statistics").unwrap();
    let graph = stdout.find("Horizontal Bar Graph").unwrap();
    assert!(table < graph);
}
