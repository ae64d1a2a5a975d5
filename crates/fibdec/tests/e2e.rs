//! End-to-end tests for the `fibdec` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibdec() -> Command {
    let mut cmd = Command::cargo_bin("fibdec").unwrap();
    cmd.env_remove("FIBDEC_N")
        .env_remove("FIBDEC_ALGO")
        .env_remove("FIBDEC_REPORT")
        .env("NO_COLOR", "1");
    cmd
}

const F1226_PREFIX: &str = "740221924612838153551556980536349050965665573918977317062028";

#[test]
fn help_lists_flags() {
    fibdec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--index"))
        .stdout(predicate::str::contains("--bench"));
}

#[test]
fn version() {
    fibdec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("fibdec "));
}

#[test]
fn quiet_prints_only_the_number() {
    fibdec()
        .args(["-n", "92", "-q"])
        .assert()
        .success()
        .stdout("7540113804746346429\n");
}

#[test]
fn default_index_is_100() {
    fibdec()
        .arg("-q")
        .assert()
        .success()
        .stdout("354224848179261915075\n");
}

#[test]
fn index_from_environment() {
    fibdec()
        .env("FIBDEC_N", "93")
        .args(["-q", "--algo", "iterative"])
        .assert()
        .success()
        .stdout("12200160415121876738\n");
}

#[test]
fn small_indices() {
    for (n, want) in [("0", "0\n"), ("1", "1\n"), ("2", "1\n"), ("10", "55\n")] {
        fibdec().args(["-q", "-n", n]).assert().success().stdout(want);
    }
}

#[test]
fn max_index_verbose() {
    fibdec()
        .args(["-n", "1226", "-v", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains(F1226_PREFIX))
        .stdout(predicate::str::contains("Result digits: 256 of 256"));
}

#[test]
fn all_strategies_agree() {
    fibdec()
        .args(["-n", "1000", "--algo", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FastDoubling"))
        .stdout(predicate::str::contains("Iterative"))
        .stdout(predicate::str::contains("Comparison Results"));
}

#[test]
fn negative_index_exits_4() {
    fibdec()
        .args(["-n", "-5"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn malformed_index_exits_4() {
    fibdec().args(["-n", "12x"]).assert().code(4);
}

#[test]
fn unknown_algorithm_exits_4() {
    fibdec().args(["--algo", "matrix"]).assert().code(4);
}

#[test]
fn over_capacity_exits_5() {
    fibdec()
        .args(["-n", "1227"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("capacity exceeded"));

    fibdec().args(["-n", "1227", "--algo", "all"]).assert().code(5);
}

#[test]
fn output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("f200.txt");
    fibdec()
        .args(["-n", "200", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        written.trim(),
        "280571172992510140037611932413038677189525"
    );
}

#[test]
fn bench_writes_report() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("output.txt");
    fibdec()
        .args(["--bench", "50", "-q", "--report"])
        .arg(&report)
        .assert()
        .success();

    let text = std::fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 51);
    assert!(lines[50].starts_with("50 "));
    assert!(lines.iter().all(|l| l.split(' ').count() == 4));
}

#[test]
fn bench_past_capacity_is_clamped() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("times.txt");
    fibdec()
        .args(["--bench", "1230", "--algo", "iterative", "--report"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("2462 reads verified"));

    let lines = std::fs::read_to_string(&report).unwrap().lines().count();
    assert_eq!(lines, 1231);
}

#[test]
fn oversized_bench_exits_4() {
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("never.txt");
    fibdec()
        .args(["--bench", "18446744073709551615", "-q", "--report"])
        .arg(&report)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds the limit"));
    assert!(!report.exists());
}

#[test]
fn bench_summary_has_header() {
    let dir = tempfile::tempdir().unwrap();
    fibdec()
        .args(["--bench", "10", "--report"])
        .arg(dir.path().join("output.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Device sweep ==="));
}

#[test]
fn completion_script() {
    fibdec()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibdec"));
}
