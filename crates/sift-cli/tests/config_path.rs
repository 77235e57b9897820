use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("sift")
        .env("SIFT_HOME", dir.path())
        .env_remove("SIFT_CONFIG")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    cargo_bin_cmd!("sift")
        .env("SIFT_HOME", dir.path())
        .env_remove("SIFT_CONFIG")
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("close_on_apply = true"));
    assert!(contents.contains("[[fields]]"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("sift")
        .env("SIFT_HOME", dir.path())
        .env_remove("SIFT_CONFIG")
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_fields_lists_configured_options() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[[fields]]
key = "priority"
title = "Filter by priority"

[[fields.options]]
label = "High"
value = "high"
"#,
    )
    .unwrap();

    cargo_bin_cmd!("sift")
        .env("SIFT_HOME", dir.path())
        .env_remove("SIFT_CONFIG")
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("priority  (Filter by priority)"))
        .stdout(predicate::str::contains("high  High"));
}
