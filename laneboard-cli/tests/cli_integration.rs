//! End-to-end tests for the laneboard binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// A command isolated from the user's home and working directory configuration
fn laneboard(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("laneboard").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env_remove("LANEBOARD_STORAGE_KEY")
        .env_remove("LANEBOARD_STORAGE_DIR")
        .arg("--dir")
        .arg(temp.path().join("store"));
    cmd
}

fn add(temp: &TempDir, column: &str, text: &str) -> String {
    let output = laneboard(temp)
        .args(["--format", "json", "add", column, text])
        .output()
        .unwrap();
    assert!(output.status.success());
    let card: Value = serde_json::from_slice(&output.stdout).unwrap();
    card["id"].as_str().unwrap().to_string()
}

fn listed(temp: &TempDir) -> Value {
    let output = laneboard(temp)
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

fn texts(listing: &Value, column: &str) -> Vec<String> {
    listing
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["column"] == column)
        .map(|entry| {
            entry["cards"]
                .as_array()
                .unwrap()
                .iter()
                .map(|card| card["text"].as_str().unwrap().to_string())
                .collect()
        })
        .unwrap_or_default()
}

fn stored_cards(dir: &Path) -> Value {
    let raw = std::fs::read_to_string(dir.join("store/trello-board-cards.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    laneboard(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("drag"))
        .stdout(predicate::str::contains("move"));
}

#[test]
fn test_add_and_list() {
    let temp = TempDir::new().unwrap();
    add(&temp, "todo", "Buy milk");
    add(&temp, "done", "Write tests");

    laneboard(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("todo (1)"))
        .stdout(predicate::str::contains("Buy milk"))
        .stdout(predicate::str::contains("in-progress (0)"));

    let stored = stored_cards(temp.path());
    assert_eq!(stored.as_array().unwrap().len(), 2);
    assert_eq!(stored[0]["column"], "todo");
}

#[test]
fn test_blank_add_changes_nothing() {
    let temp = TempDir::new().unwrap();
    laneboard(&temp)
        .args(["add", "todo", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blank"));
    assert!(!temp.path().join("store/trello-board-cards.json").exists());
}

#[test]
fn test_move_clamps_index() {
    let temp = TempDir::new().unwrap();
    let a = add(&temp, "todo", "a");
    add(&temp, "todo", "b");
    add(&temp, "done", "c");

    laneboard(&temp)
        .args(["move", &a, "done", "99"])
        .assert()
        .success()
        .stdout(predicate::str::contains("done[1]"));

    let listing = listed(&temp);
    assert_eq!(texts(&listing, "todo"), ["b"]);
    assert_eq!(texts(&listing, "done"), ["c", "a"]);
}

#[test]
fn test_move_unknown_card() {
    let temp = TempDir::new().unwrap();
    add(&temp, "todo", "a");
    laneboard(&temp)
        .args(["move", "missing", "done", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No card with id missing"));
}

#[test]
fn test_delete() {
    let temp = TempDir::new().unwrap();
    let a = add(&temp, "todo", "a");
    add(&temp, "todo", "b");

    laneboard(&temp).args(["delete", &a]).assert().success();
    laneboard(&temp).args(["delete", "missing"]).assert().success();

    assert_eq!(texts(&listed(&temp), "todo"), ["b"]);
}

#[test]
fn test_drag_between_columns() {
    let temp = TempDir::new().unwrap();
    add(&temp, "todo", "a");
    let b = add(&temp, "todo", "b");
    add(&temp, "done", "c");

    // done starts at x 576; its first card is centred at y 76
    laneboard(&temp)
        .args(["drag", &b, "--via", "300,80", "--x", "600", "--y", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("done[0]"));

    let listing = listed(&temp);
    assert_eq!(texts(&listing, "todo"), ["a"]);
    assert_eq!(texts(&listing, "done"), ["b", "c"]);
}

#[test]
fn test_drag_outside_columns_keeps_card() {
    let temp = TempDir::new().unwrap();
    let a = add(&temp, "todo", "a");

    laneboard(&temp)
        .args(["drag", &a, "--x", "5000", "--y", "60"])
        .assert()
        .code(2);

    assert_eq!(texts(&listed(&temp), "todo"), ["a"]);
}

#[test]
fn test_columns_command_uses_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("board.toml");
    std::fs::write(&config, "columns = [\"backlog\", \"doing\"]\n").unwrap();

    laneboard(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "columns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("backlog"))
        .stdout(predicate::str::contains("doing"))
        .stdout(predicate::str::contains("todo").not());
}

#[test]
fn test_corrupt_store_loads_empty() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("store")).unwrap();
    std::fs::write(temp.path().join("store/trello-board-cards.json"), "{oops").unwrap();

    laneboard(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("todo (0)"));
}

#[test]
fn test_busy_store_is_reported_as_retryable() {
    let temp = TempDir::new().unwrap();
    let store = laneboard_kanban::FileBlobStore::new(temp.path().join("store"));
    let _held = store.lock().unwrap();

    laneboard(&temp)
        .args(["add", "todo", "blocked"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("try again"));
}
