use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

const RECORDS: &str = r#"[
    {"id": 1, "status": "open", "title": "Login fails"},
    {"id": 2, "status": "closed", "title": "Typo on about page"},
    {"id": 3, "status": "open", "title": "Slow search"}
]"#;

fn setup() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let file = dir.path().join("records.json");
    fs::write(&file, RECORDS).unwrap();
    (dir, file)
}

fn ids(stdout: &[u8]) -> Vec<i64> {
    let value: serde_json::Value = serde_json::from_slice(stdout).unwrap();
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect()
}

fn sift(home: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("sift");
    cmd.env("SIFT_HOME", home).env_remove("SIFT_CONFIG");
    cmd
}

#[test]
fn test_filter_without_assignments_returns_all() {
    let (dir, file) = setup();

    let output = sift(dir.path())
        .arg("filter")
        .arg(&file)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(ids(&output), vec![1, 2, 3]);
}

#[test]
fn test_filter_by_status() {
    let (dir, file) = setup();

    let output = sift(dir.path())
        .arg("filter")
        .arg(&file)
        .args(["--set", "status=open"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(ids(&output), vec![1, 3]);
}

#[test]
fn test_filter_count() {
    let (dir, file) = setup();

    sift(dir.path())
        .arg("filter")
        .arg(&file)
        .args(["--set", "status=closed", "--count"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_filter_empty_value_unsets() {
    let (dir, file) = setup();

    sift(dir.path())
        .arg("filter")
        .arg(&file)
        .args(["--set", "status=closed", "--set", "status=", "--count"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_filter_rejects_unknown_option() {
    let (dir, file) = setup();

    sift(dir.path())
        .arg("filter")
        .arg(&file)
        .args(["--set", "status=pending"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an option of 'status'"));
}

#[test]
fn test_filter_rejects_unknown_field() {
    let (dir, file) = setup();

    sift(dir.path())
        .arg("filter")
        .arg(&file)
        .args(["--set", "owner=me"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown filter field 'owner'"));
}

#[test]
fn test_filter_reports_bad_records_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("records.json");
    fs::write(&file, r#"{"id": 1}"#).unwrap();

    sift(dir.path())
        .arg("filter")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected a JSON array"));
}

#[test]
fn test_filter_uses_config_close_linkage_off() {
    let (dir, file) = setup();
    fs::write(dir.path().join("config.toml"), "close_on_apply = false\n").unwrap();

    sift(dir.path())
        .arg("filter")
        .arg(&file)
        .args(["--set", "status=open", "--count"])
        .assert()
        .success()
        .stdout("2\n");
}
