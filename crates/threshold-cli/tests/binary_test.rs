//! End-to-end tests for the `threshold-check` binary.

use std::process::{Command, Output};

fn run_binary() -> Output {
    Command::new(env!("CARGO_BIN_EXE_threshold-check"))
        .env("RUST_LOG", "debug")
        .output()
        .unwrap()
}

#[test]
fn test_stdout_is_exactly_draw_then_message() {
    for _ in 0..20 {
        let output = run_binary();
        assert!(output.status.success());

        let stdout = String::from_utf8(output.stdout).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 2, "unexpected stdout: {stdout:?}");

        let n: u32 = lines[0].parse().unwrap();
        assert!(n < 100, "draw {n} out of range");
        let expected = if n > 20 {
            "Number is greater than 20"
        } else {
            "Number is less than 20"
        };
        assert_eq!(lines[1], expected);
    }
}

#[test]
fn test_logs_are_json_records_on_stderr() {
    let output = run_binary();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    let records: Vec<serde_json::Value> = stderr
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert!(!records.is_empty());
    assert!(
        records
            .iter()
            .any(|r| r["fields"]["message"] == "check settled")
    );
}
