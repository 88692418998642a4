//! CLI output snapshot tests

use crate::helpers::Workspace;

fn run(ws: &Workspace, args: &[&str]) -> String {
    let out = ws.cmd().args(args).output().expect("binary runs");
    String::from_utf8_lossy(&out.stdout).trim_end().to_string()
}

#[test]
fn snapshot_table() {
    let ws = Workspace::new();
    ws.write("in.txt", "cat dog elephant");

    insta::assert_snapshot!(run(&ws, &["-i", "in.txt", "-l", "3-3,4-10"]), @r"
    ============================================================
    Word Length Statistics
    ============================================================
    Length Range         Count           Percentage
    ------------------------------------------------------------
    3-3                  2                66.67%
    4-10                 1                33.33%
    ------------------------------------------------------------
    Total                3               100.00%
    ============================================================
    ");
}

#[test]
fn snapshot_table_with_other() {
    let ws = Workspace::new();
    ws.write("in.txt", "I am a rustacean");

    insta::assert_snapshot!(run(&ws, &["-i", "in.txt", "-l", "1,2", "--other"]), @r"
    ============================================================
    Word Length Statistics
    ============================================================
    Length Range         Count           Percentage
    ------------------------------------------------------------
    1-1                  2                50.00%
    2-2                  1                25.00%
    Other                1                25.00%
    ------------------------------------------------------------
    Total                4               100.00%
    ============================================================
    ");
}

#[test]
fn snapshot_help() {
    let out = Workspace::new()
        .cmd()
        .arg("--help")
        .output()
        .expect("binary runs");
    let help = String::from_utf8_lossy(&out.stdout).to_string();
    assert!(help.contains("--input"));
    assert!(help.contains("--graph"));
    assert!(help.contains("~/.config/wordstats/config.toml"));
}
