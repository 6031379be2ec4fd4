#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn envupdate_cmd(data: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("envupdate"));
    cmd.env("ENVUPDATE_DATA", data.path().as_os_str())
        .env_remove("ENVUPDATE_LOG")
        .env_remove("ENVUPDATE_DELIMITER")
        .env_remove("ENVUPDATE_EXCHANGE_CAPACITY")
        .env_remove("ENVUPDATE_MISSING_AS_EMPTY");
    cmd
}

fn seed_path(data: &TempDir) {
    envupdate_cmd(data)
        .args(["set", "Path", "C:\\A;C:\\B;C:\\C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path set (user)"));
}

#[test]
fn test_edit_workflow() {
    let data = TempDir::new().unwrap();
    seed_path(&data);

    // 1. Append moves an existing segment to the end
    envupdate_cmd(&data)
        .args(["append", "Path", "c:\\b"])
        .assert()
        .success()
        .stdout("C:\\A;C:\\C;c:\\b\n");

    // 2. Prepend puts a new segment first
    envupdate_cmd(&data)
        .args(["prepend", "Path", "C:\\Tools"])
        .assert()
        .success()
        .stdout("C:\\Tools;C:\\A;C:\\C;c:\\b\n");

    // 3. Remove drops it again, ignoring case
    envupdate_cmd(&data)
        .args(["remove", "PATH", "c:\\tools"])
        .assert()
        .success()
        .stdout("C:\\A;C:\\C;c:\\b\n");

    // 4. Show reads back what was written
    envupdate_cmd(&data)
        .args(["show", "Path", "--segments"])
        .assert()
        .success()
        .stdout("C:\\A\nC:\\C\nc:\\b\n");

    assert!(data.path().join("user.json").exists());
    assert!(!data.path().join("machine.json").exists());
}

#[test]
fn test_missing_value_fails() {
    let data = TempDir::new().unwrap();

    envupdate_cmd(&data)
        .args(["append", "Path", "C:\\X"])
        .assert()
        .failure()
        .code(1)
        .stdout("\n")
        .stderr(predicate::str::contains("Could not update Path"));
}

#[test]
fn test_missing_value_as_empty_via_env() {
    let data = TempDir::new().unwrap();

    envupdate_cmd(&data)
        .env("ENVUPDATE_MISSING_AS_EMPTY", "true")
        .args(["append", "Path", "C:\\X"])
        .assert()
        .success()
        .stdout("C:\\X\n");
}

#[test]
fn test_invoke_protocol() {
    let data = TempDir::new().unwrap();
    seed_path(&data);

    envupdate_cmd(&data)
        .args(["invoke", "Path", "r", "hkcu", "C:\\A"])
        .assert()
        .success()
        .stdout("C:\\B;C:\\C\n");

    // Unknown action code: nothing is read or written
    envupdate_cmd(&data)
        .args(["invoke", "Path", "X", "HKCU", "C:\\Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized action"));

    // Unknown scope code
    envupdate_cmd(&data)
        .args(["invoke", "Path", "A", "HKCR", "C:\\Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("storage scope is not available"));

    envupdate_cmd(&data)
        .args(["show", "Path"])
        .assert()
        .success()
        .stdout("C:\\B;C:\\C\n");
}

#[test]
fn test_scopes_are_separate() {
    let data = TempDir::new().unwrap();
    seed_path(&data);

    envupdate_cmd(&data)
        .args(["set", "Path", "D:\\M", "--scope", "HKLM"])
        .assert()
        .success();

    envupdate_cmd(&data)
        .args(["append", "Path", "D:\\N", "--scope", "hklm"])
        .assert()
        .success()
        .stdout("D:\\M;D:\\N\n");

    envupdate_cmd(&data)
        .args(["show", "Path"])
        .assert()
        .success()
        .stdout("C:\\A;C:\\B;C:\\C\n");
}

#[test]
fn test_show_json() {
    let data = TempDir::new().unwrap();
    seed_path(&data);

    let output = envupdate_cmd(&data)
        .args(["show", "Path", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["value"], "C:\\A;C:\\B;C:\\C");
    assert_eq!(parsed["segments"].as_array().map(|a| a.len()), Some(3));
}

#[test]
fn test_show_missing_value_fails() {
    let data = TempDir::new().unwrap();

    envupdate_cmd(&data)
        .args(["show", "Path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No value named Path"));
}

#[test]
fn test_config_file_delimiter() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("envupdate.toml"), "delimiter = \":\"\n").unwrap();

    envupdate_cmd(&data)
        .args(["set", "PATH", "/usr/bin:/bin"])
        .assert()
        .success();

    envupdate_cmd(&data)
        .args(["prepend", "PATH", "/opt/bin"])
        .assert()
        .success()
        .stdout("/opt/bin:/usr/bin:/bin\n");

    envupdate_cmd(&data)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("delimiter = \":\""));
}

#[test]
fn test_invalid_config_fails() {
    let data = TempDir::new().unwrap();
    fs::write(data.path().join("envupdate.toml"), "delimiter = \";;\"\n").unwrap();

    envupdate_cmd(&data)
        .args(["show", "Path"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid delimiter"));
}

#[test]
fn test_config_template() {
    let data = TempDir::new().unwrap();

    envupdate_cmd(&data)
        .args(["config", "--template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exchange_capacity"));
}
