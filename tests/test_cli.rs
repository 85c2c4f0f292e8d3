//! Contract tests for the profconf command line

use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("profconf");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("encode"))
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version_flag() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("profconf");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("profconf "))
        .stdout(predicate::str::is_match(r"^profconf \S+ \(\S+\)").unwrap());
}

#[test]
fn test_show_local_defaults() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("profconf");
    cmd.arg("show");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Profiling Configuration:"))
        .stdout(predicate::str::contains("0.5s"))
        .stdout(predicate::str::contains(".dtxprof (default)"));
}

#[test]
fn test_show_remote_json() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("profconf");
    let output = cmd.args(["show", "--remote", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["format"], "dtxprof-configuration");
    assert_eq!(value["configuration"]["samplingInterval"], 1.0);
    assert_eq!(value["configuration"]["numberOfSamplesBeforeFlushToDisk"], 200);
}

#[test]
fn test_show_applies_overlay() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("profiling.toml");
    fs::write(
        &config_path,
        r#"
[sampling]
interval = 2.5

[recording]
stack_traces = true
"#,
    )
    .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("profconf");
    let output = cmd
        .args(["show", "--json", "--config", config_path.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["configuration"]["samplingInterval"], 2.5);
    assert_eq!(value["configuration"]["collectStackTraces"], true);
}

#[test]
fn test_invalid_overlay_rejected() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("invalid.toml");
    fs::write(&config_path, "[sampling]\ninterval = \"fast\"\n").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("profconf");
    cmd.args(["show", "--config", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_encode_then_decode() {
    let temp_dir = tempdir().unwrap();
    let payload_path = temp_dir.path().join("payload.json");

    let mut encode = assert_cmd::cargo_bin_cmd!("profconf");
    encode
        .args(["encode", "--remote", "--output", payload_path.to_str().unwrap()])
        .assert()
        .success();
    assert!(payload_path.exists());

    let mut decode = assert_cmd::cargo_bin_cmd!("profconf");
    decode
        .args(["decode", payload_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1s"));
}

#[test]
fn test_decode_rejects_tampered_payload() {
    let temp_dir = tempdir().unwrap();
    let payload_path = temp_dir.path().join("payload.json");

    let mut encode = assert_cmd::cargo_bin_cmd!("profconf");
    let output = encode.arg("encode").output().unwrap();
    assert!(output.status.success());

    let mut value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    value["configuration"]["injected"] = serde_json::json!("payload");
    fs::write(&payload_path, serde_json::to_vec(&value).unwrap()).unwrap();

    let mut decode = assert_cmd::cargo_bin_cmd!("profconf");
    decode
        .args(["decode", payload_path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rejected payload"))
        .stderr(predicate::str::contains("injected"));
}

#[test]
fn test_decode_missing_file() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("profconf");
    cmd.args(["decode", "/nonexistent/payload.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read payload"));
}
