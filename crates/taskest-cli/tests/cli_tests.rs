//! End-to-end tests driving the `taskest` binary.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use taskest_test_utils::config::{TestConfigBuilder, TestConfigFile};

fn taskest(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taskest"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run taskest")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "taskest failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_json_output() {
    let output = taskest(&[
        "--format",
        "json",
        "大規模なAPIの移行をWindowsとLinuxで実施;設定を追加",
    ]);
    let value = stdout_json(&output);

    assert_eq!(value["profile"], "general");
    assert_eq!(value["items"].as_array().unwrap().len(), 2);
    assert_eq!(value["items"][0]["core_hours"], 10.56);
    assert_eq!(value["items"][1]["core_hours"], 1.0);
    assert_eq!(value["totals"]["core_hours"], 11.56);
    assert_eq!(value["totals"]["grand_total_hours"], 11.56);
}

#[test]
fn test_markdown_is_default() {
    let output = taskest(&["UIを調整;APIの統合テストを整備"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("**Input**: UIを調整;APIの統合テストを整備"));
    assert!(stdout.contains("| # | Task | Difficulty/Reason | Domain/Reason | Core h | QA h | Shown |"));
    assert!(stdout.contains("| 1 | UIを調整 |"));
    assert!(!stdout.contains("**QA"));
}

#[test]
fn test_qa_flags_and_buffers() {
    let output = taskest(&[
        "--format",
        "json",
        "--qa",
        "--qa-include",
        "--buffer",
        "1.2",
        "--qa-buffer",
        "1.5",
        "pytestで境界値を検証",
    ]);
    let value = stdout_json(&output);

    assert_eq!(value["with_qa"], true);
    assert_eq!(value["qa_included_in_total"], true);
    assert_eq!(value["buffers"]["core_buffer"], 1.2);
    assert_eq!(value["buffers"]["qa_buffer"], 1.5);
    assert_eq!(value["items"][0]["qa"]["cases_estimate"], 8);
    // 8 cases × 15 min = 2.0h × 1.5
    assert_eq!(value["totals"]["qa_hours"], 3.0);
}

#[test]
fn test_config_file_supplies_defaults() {
    let config = TestConfigBuilder::new()
        .profile("conservative")
        .with_qa(true)
        .format("json")
        .build();
    let file = TestConfigFile::from_config(&config);
    let path = file.path().to_str().unwrap();

    let value = stdout_json(&taskest(&["--config", path, "設定を追加"]));
    assert_eq!(value["profile"], "conservative");
    assert_eq!(value["with_qa"], true);
    assert_eq!(value["items"][0]["core_hours"], 1.3);
}

#[test]
fn test_cli_flags_override_config() {
    let config = TestConfigBuilder::new()
        .profile("conservative")
        .buffer(2.0)
        .format("json")
        .build();
    let file = TestConfigFile::from_config(&config);
    let path = file.path().to_str().unwrap();

    let value = stdout_json(&taskest(&[
        "-c", path, "--profile", "fast", "--buffer", "1.0", "設定を追加",
    ]));
    assert_eq!(value["profile"], "fast");
    assert_eq!(value["buffers"]["core_buffer"], 1.0);
    assert_eq!(value["totals"]["core_hours"], 0.7);
}

#[test]
fn test_rejects_invalid_buffer() {
    let output = taskest(&["--buffer", "0", "設定を追加"]);
    assert!(!output.status.success());

    let output = taskest(&["--qa-buffer", "abc", "設定を追加"]);
    assert!(!output.status.success());
}

#[test]
fn test_rejects_unknown_profile_flag() {
    let output = taskest(&["--profile", "turbo", "設定を追加"]);
    assert!(!output.status.success());
}

#[test]
fn test_missing_config_file_fails() {
    let output = taskest(&["--config", "/nonexistent/taskest.toml", "設定を追加"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to load config"));
}

#[test]
fn test_empty_text_yields_zero_totals() {
    let value = stdout_json(&taskest(&["--format", "json", ""]));
    assert_eq!(value["items"].as_array().unwrap().len(), 0);
    assert_eq!(value["totals"]["grand_total_hours"], 0.0);
}

#[test]
fn test_logs_stay_off_stdout() {
    let output = taskest(&["-vv", "--format", "json", "設定を追加"]);
    // stdout must still be a single JSON document
    let value = stdout_json(&output);
    assert_eq!(value["items"].as_array().unwrap().len(), 1);
}

#[test]
fn test_unknown_config_profile_warns_and_falls_back() {
    let config = TestConfigBuilder::new().profile("turbo").format("json").build();
    let file = TestConfigFile::from_config(&config);
    let path = file.path().to_str().unwrap();

    let output = taskest(&["--config", path, "設定を追加"]);
    let value = stdout_json(&output);
    assert_eq!(value["profile"], "general");
    assert_eq!(value["items"][0]["core_hours"], 1.0);

    // The fallback warning is emitted once logging is up
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Unknown profile").count(), 1);
}
