//! End-to-end tests for the armctl binary.

use std::path::Path;
use std::process::{Command, Output};

const WORKSPACE_ID: &str = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.Databricks/workspaces/Workspace1";

fn armctl(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_armctl"))
        .args(args)
        .env("ARMCTL_CONFIG", config)
        .env_remove("ARMCTL_FORMAT")
        .env_remove("ARMCTL_CASING")
        .env_remove("ARMCTL_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run armctl")
}

fn json_data(output: &Output) -> serde_json::Value {
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["schemaVersion"], "armctl.v1");
    value["data"].clone()
}

#[test]
fn parse_identifies_workspace() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let output = armctl(&config, &["--format", "json", "parse", WORKSPACE_ID]);
    assert!(output.status.success());

    let data = json_data(&output);
    assert_eq!(data["kind"], "Databricks Workspace");
    assert_eq!(data["id"], WORKSPACE_ID);
    assert_eq!(data["segments"]["workspaceName"], "Workspace1");
}

#[test]
fn parse_strict_rejects_lowercase_type() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let lowered = WORKSPACE_ID.replace("workspaces", "Workspaces");

    let output = armctl(&config, &["parse", &lowered]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("only matches Databricks Workspace when ignoring case"));

    let output = armctl(&config, &["--insensitive", "--format", "json", "parse", &lowered]);
    assert!(output.status.success());
    assert_eq!(json_data(&output)["id"], WORKSPACE_ID);
}

#[test]
fn validate_fails_with_every_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let output = armctl(
        &config,
        &[
            "--format",
            "json",
            "validate",
            "--kind",
            "databricks workspace",
            WORKSPACE_ID,
            &format!("{WORKSPACE_ID}/"),
            "",
        ],
    );
    assert!(!output.status.success());

    let data = json_data(&output);
    assert_eq!(data["checked"], 3);
    assert_eq!(data["errors"].as_array().unwrap().len(), 2);
}

#[test]
fn config_set_changes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    assert!(armctl(&config, &["config", "set", "format", "json"]).status.success());
    assert!(armctl(&config, &["config", "set", "casing", "insensitive"]).status.success());

    let output = armctl(&config, &["recase", &WORKSPACE_ID.to_ascii_uppercase()]);
    assert!(output.status.success());
    let data = json_data(&output);
    assert_eq!(data[0]["kind"], "Databricks Workspace");
    assert_eq!(data[0]["changed"], true);
}

#[test]
fn version_prints_package_version() {
    let dir = tempfile::tempdir().unwrap();
    let output = armctl(&dir.path().join("config.json"), &["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        format!("armctl {}", env!("CARGO_PKG_VERSION"))
    );
}
