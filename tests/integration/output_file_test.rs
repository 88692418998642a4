//! Report duplication to a file

use std::fs;

use crate::helpers::Workspace;

#[test]
fn file_matches_uncolored_console() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "cat dog elephant");
    let out_path = ws.path().join("report.txt");

    let out = ws
        .cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "3-3,4-10", "-g", "h", "-o"])
        .arg(&out_path)
        .output()
        .expect("binary runs");

    assert!(out.status.success());
    let file = fs::read_to_string(&out_path).unwrap();
    assert_eq!(String::from_utf8(out.stdout).unwrap(), file);
}

#[test]
fn colors_never_reach_the_file() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "cat dog elephant");
    let out_path = ws.path().join("report.txt");

    let out = ws
        .cmd()
        .env_remove("NO_COLOR")
        .arg("-i")
        .arg(&input)
        .args(["-l", "3-3,4-10", "-g", "v", "--color", "-o"])
        .arg(&out_path)
        .output()
        .expect("binary runs");

    assert!(out.status.success());
    let console = String::from_utf8(out.stdout).unwrap();
    let file = fs::read_to_string(&out_path).unwrap();
    assert!(console.contains("\x1b[91m"));
    assert!(!file.contains('\x1b'));
    assert!(file.contains("Vertical Bar Graph"));
}

#[test]
fn no_color_env_disables_console_colors() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "cat dog elephant");

    let out = ws
        .cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "3-3,4-10", "--color"])
        .output()
        .expect("binary runs");

    assert!(!String::from_utf8(out.stdout).unwrap().contains('\x1b'));
}

#[test]
fn unwritable_output_fails() {
    let ws = Workspace::new();
    let input = ws.write("in.txt", "cat");

    ws.cmd()
        .arg("-i")
        .arg(&input)
        .args(["-l", "1-5", "-o"])
        .arg(ws.path().join("no/such/dir/out.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicates::str::contains("Cannot write output file"));
}
