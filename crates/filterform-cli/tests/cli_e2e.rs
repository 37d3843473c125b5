#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const FIELDS: &str = r#"[
    { "dataIndex": "id", "label": "ID", "type": "number", "min": 0 },
    { "dataIndex": "name", "label": "Name", "type": "string" }
]"#;

fn filterform_cmd() -> Command {
    let mut cmd = Command::new(cargo_bin("filterform"));
    cmd.env_remove("FILTERFORM_MAX_DEPTH")
        .env_remove("FILTERFORM_SEED_NEW_FILTERS")
        .env_remove("FILTERFORM_TRIM_TAGS");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_ops_lists_boolean_catalog() {
    filterform_cmd()
        .args(["ops", "boolean"])
        .assert()
        .success()
        .stdout(predicate::str::contains("eq"))
        .stdout(predicate::str::contains("null"))
        .stdout(predicate::str::contains("contains").not());
}

#[test]
fn test_ops_rejects_unknown_type() {
    filterform_cmd()
        .args(["ops", "money"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown field type 'money'"));
}

#[test]
fn test_replay_prints_submitted_tree() {
    let temp = TempDir::new().unwrap();
    let fields = write(&temp, "fields.json", FIELDS);
    let script = write(
        &temp,
        "edits.txt",
        "field 0 id\nop 0 in\nvalue 0 [1, 2, 3]\nadd-group .\nconj 1 or\n",
    );

    let output = filterform_cmd()
        .arg("replay")
        .arg(&fields)
        .arg(&script)
        .output()
        .unwrap();
    assert!(output.status.success());

    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        tree,
        serde_json::json!({
            "type": "group",
            "conjunction": "and",
            "filters": [
                { "type": "filter", "dataIndex": "id", "operation": "in", "value": [1, 2, 3] },
                { "type": "group", "conjunction": "or", "filters": [ { "type": "filter" } ] }
            ]
        })
    );
}

#[test]
fn test_replay_reports_rejected_edit() {
    let temp = TempDir::new().unwrap();
    let fields = write(&temp, "fields.json", FIELDS);
    let script = write(&temp, "edits.txt", "add-filter .\nremove 0\n");

    filterform_cmd()
        .arg("replay")
        .arg(&fields)
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("edit 2"))
        .stderr(predicate::str::contains("cannot be removed"));
}

#[test]
fn test_strict_replay_fails_on_incomplete_tree() {
    let temp = TempDir::new().unwrap();
    let fields = write(&temp, "fields.json", FIELDS);
    let script = write(&temp, "edits.txt", "field 0 name\n");

    filterform_cmd()
        .arg("replay")
        .arg(&fields)
        .arg(&script)
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Operation is required"));
}

#[test]
fn test_depth_limit_from_config_file() {
    let temp = TempDir::new().unwrap();
    let fields = write(&temp, "fields.json", FIELDS);
    let config = write(&temp, "filterform.toml", "max_depth = 1\n");
    let script = write(&temp, "edits.txt", "add-group .\n");

    filterform_cmd()
        .arg("replay")
        .arg(&fields)
        .arg(&script)
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum depth of 1"));
}

#[test]
fn test_check_accepts_valid_tree() {
    let temp = TempDir::new().unwrap();
    let fields = write(&temp, "fields.json", FIELDS);
    let tree = write(
        &temp,
        "tree.json",
        r#"{ "type": "group", "conjunction": "and", "filters": [
            { "type": "filter", "dataIndex": "name", "operation": "startsWith", "value": "Al" }
        ] }"#,
    );

    filterform_cmd()
        .arg("check")
        .arg(&fields)
        .arg(&tree)
        .assert()
        .success()
        .stdout(predicate::str::diff("ok\n"));
}

#[test]
fn test_check_lists_issues() {
    let temp = TempDir::new().unwrap();
    let fields = write(&temp, "fields.json", FIELDS);
    let tree = write(
        &temp,
        "tree.json",
        r#"{ "conjunction": "or", "filters": [
            { "type": "filter", "dataIndex": "id", "operation": "gt", "value": -5 },
            { "type": "filter", "dataIndex": "name" }
        ] }"#,
    );

    filterform_cmd()
        .arg("check")
        .arg(&fields)
        .arg(&tree)
        .assert()
        .failure()
        .stdout(predicate::str::contains("0:"))
        .stdout(predicate::str::contains("1: Operation is required"))
        .stderr(predicate::str::contains("2 validation issue(s)"));
}
