//! End-to-end tests for the earnr binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn earnr() -> Command {
    Command::cargo_bin("earnr").unwrap()
}

#[test]
fn analyze_outputs_json_result() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "오늘 배달 내역\n배달 17건\n53,920원\n05/29 목").unwrap();

    earnr()
        .args(["analyze", input.to_str().unwrap(), "--platform", "baemin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"amount\": 53920"))
        .stdout(predicate::str::contains("\"platform\": \"baemin\""))
        .stdout(predicate::str::contains("\"is_valid\": true"));
}

#[test]
fn analyze_text_format_shows_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "오늘 배달 내역\n배달 17건\n53,920원\n05/29 목").unwrap();

    earnr()
        .args([
            "analyze",
            input.to_str().unwrap(),
            "--platform",
            "baemin",
            "--format",
            "text",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("deliveries: 17"))
        .stdout(predicate::str::contains("53920원"));
}

#[test]
fn analyze_rejects_dump_without_amount() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    std::fs::write(&input, "오늘 배달 내역\n배달 17건\n05/29 목").unwrap();

    // Invalidity is data, not a process failure: exit code stays 0.
    earnr()
        .args(["analyze", input.to_str().unwrap(), "--platform", "baemin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"is_valid\": false"))
        .stdout(predicate::str::contains("no amount detected"));
}

#[test]
fn analyze_fails_on_missing_input() {
    earnr()
        .args(["analyze", "/nonexistent/receipt.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn config_show_prints_bounds() {
    earnr()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"min_confidence\""))
        .stdout(predicate::str::contains("\"max_delivery_count\""));
}

#[test]
fn config_init_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("earnr.json");

    earnr()
        .args(["config", "init", path.to_str().unwrap()])
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"validation\""));
}
