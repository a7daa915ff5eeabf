use std::process::{Command, Output};

const TRANSCRIPT: &str = "1\n2\n3\n0\n1\n2\nrange 0\nrange 1\nrange 2\nloop\n1\n3\n5\n";

fn run_binary(args: &[&str], rust_log: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_for_loops"));
    cmd.args(args).env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        cmd.env("RUST_LOG", filter);
    }
    cmd.output().expect("failed to launch for_loops")
}

#[test]
fn prints_thirteen_lines_in_order() {
    let output = run_binary(&[], None);
    assert!(output.status.success());
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, TRANSCRIPT);
    assert_eq!(stdout.lines().count(), 13);
}

#[test]
fn stderr_is_silent_by_default() {
    let output = run_binary(&[], None);
    assert!(output.stderr.is_empty());
}

#[test]
fn arguments_are_ignored() {
    let output = run_binary(&["--verbose", "extra"], None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), TRANSCRIPT);
}

#[test]
fn repeated_runs_are_identical() {
    let first = run_binary(&[], None);
    let second = run_binary(&[], None);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn debug_logging_stays_off_stdout() {
    let output = run_binary(&[], Some("for_loops=debug"));
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), TRANSCRIPT);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("pattern finished"));
    assert!(stderr.contains("transcript written"));
}
