//! End-to-end tests for the `kanban-order` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const BOARD: &str = r#"{
    "tasks": [
        {"id": "1", "column_id": "col1", "title": "One", "position": 1000},
        {"id": "2", "column_id": "col1", "title": "Two", "position": 2000},
        {"id": "3", "column_id": "col2", "title": "Three", "position": 1000, "labels": ["x"]}
    ]
}"#;

fn board_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("board.json");
    std::fs::write(&path, BOARD).unwrap();
    path
}

fn kanban_order() -> Command {
    let mut cmd = Command::cargo_bin("kanban-order").unwrap();
    cmd.env_remove("KANBAN_ORDERING_GAP")
        .env_remove("KANBAN_ORDERING_REBALANCE_THRESHOLD")
        .env_remove("KANBAN_ORDERING_MIN_GAP")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_place_first_from_file() {
    let dir = TempDir::new().unwrap();
    let path = board_file(&dir);

    let output = kanban_order()
        .args(["place", "--tasks"])
        .arg(&path)
        .args(["--task", "3", "--column", "col1", "--drop", "first"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "place should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["new_position"], 500.0);
    assert_eq!(value["updated_tasks"][2]["column_id"], "col1");
    assert_eq!(value["updated_tasks"][2]["labels"][0], "x");
}

#[test]
fn test_place_from_stdin() {
    kanban_order()
        .args(["place", "--task", "3", "--column", "col1", "--drop", "last"])
        .write_stdin(BOARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"new_position\": 3000.0"));
}

#[test]
fn test_place_unknown_target_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let path = board_file(&dir);

    kanban_order()
        .args(["place", "--tasks"])
        .arg(&path)
        .args(["--task", "3", "--column", "col1", "--drop", "after", "--target", "missing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: target task not found: missing"));
}

#[test]
fn test_place_without_target_exits_with_error() {
    kanban_order()
        .args(["place", "--task", "3", "--column", "col1", "--drop", "before"])
        .write_stdin(BOARD)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("target_task_id is required"));
}

#[test]
fn test_unknown_drop_position_is_usage_error() {
    kanban_order()
        .args(["place", "--task", "3", "--column", "col1", "--drop", "middle"])
        .write_stdin(BOARD)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown drop position"));
}

#[test]
fn test_new_position_in_empty_snapshot() {
    kanban_order()
        .args(["new-position", "--column", "todo"])
        .write_stdin("[]")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"position\": 1000.0"));
}

#[test]
fn test_new_position_honours_env_gap() {
    kanban_order()
        .env("KANBAN_ORDERING_GAP", "10")
        .args(["new-position", "--column", "col1"])
        .write_stdin(BOARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"position\": 2010.0"));
}

#[test]
fn test_rebalance_write_set_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ordering.toml");
    std::fs::write(&config, "gap = 10.0\n").unwrap();

    let output = kanban_order()
        .args(["rebalance", "--column", "col1", "--write-set", "--config"])
        .arg(&config)
        .write_stdin(BOARD)
        .output()
        .unwrap();

    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["position"], 10.0);
    assert_eq!(rows[1]["position"], 20.0);
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ordering.toml");
    std::fs::write(&config, "gap = 0.0005\n").unwrap();

    kanban_order()
        .args(["health", "--column", "col1", "--config"])
        .arg(&config)
        .write_stdin(BOARD)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn test_health_yaml() {
    kanban_order()
        .args(["health", "--column", "col1", "--format", "yaml"])
        .write_stdin(BOARD)
        .assert()
        .success()
        .stdout(predicate::str::contains("task_count: 2"))
        .stdout(predicate::str::contains("needs_rebalancing: false"));
}

#[test]
fn test_malformed_snapshot() {
    kanban_order()
        .args(["health", "--column", "col1"])
        .write_stdin("not json")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid task snapshot"));
}

#[test]
fn test_debug_logs_to_stderr() {
    kanban_order()
        .args(["--debug", "new-position", "--column", "col1"])
        .write_stdin(BOARD)
        .assert()
        .success()
        .stderr(predicate::str::contains("read task snapshot"));
}
