//! Integration tests for the install-tools binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn install_tools() -> Command {
    let mut cmd = Command::new(cargo_bin("install-tools"));
    cmd.env_remove("INSTALL_TOOLS_PROMPT_CONTINUE")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    install_tools()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kubectl, helm, minikube and argo"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    install_tools()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    install_tools().arg("upgrade").assert().failure().code(2);
    Ok(())
}

#[test]
fn list_shows_pinned_versions() -> Result<(), Box<dyn std::error::Error>> {
    install_tools()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("v1.34.0"))
        .stdout(predicate::str::contains("v3.14.1"))
        .stdout(predicate::str::contains("v1.32.0"))
        .stdout(predicate::str::contains("v3.7.1"));
    Ok(())
}

#[test]
fn list_json_is_machine_readable() -> Result<(), Box<dyn std::error::Error>> {
    let output = install_tools().args(["list", "--json"]).output()?;
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let entries = entries.as_array().expect("array");
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0]["name"], "kubectl");
    assert_eq!(
        entries[0]["download_url"],
        "https://dl.k8s.io/release/v1.34.0/bin/linux/amd64/kubectl"
    );
    assert_eq!(entries[3]["install_path"], "/usr/local/bin/argo");
    Ok(())
}

#[test]
fn status_json_lists_every_tool() -> Result<(), Box<dyn std::error::Error>> {
    let output = install_tools().args(["status", "--json"]).output()?;
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let names: Vec<_> = entries
        .as_array()
        .expect("array")
        .iter()
        .map(|e| e["name"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(names, ["kubectl", "helm", "minikube", "argo"]);
    Ok(())
}

#[test]
fn clean_twice_is_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("argo.gz"), b"gz")?;
    fs::write(temp.path().join("get_helm.sh"), b"#!/bin/sh")?;

    install_tools()
        .arg("clean")
        .arg("--work-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed temporary file: argo.gz"));

    install_tools()
        .arg("clean")
        .arg("--work-dir")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean."));

    assert!(!temp.path().join("argo.gz").exists());
    assert!(!temp.path().join("get_helm.sh").exists());
    Ok(())
}

#[test]
fn run_declined_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    install_tools()
        .current_dir(temp.path())
        .arg("run")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Distro:"))
        .stdout(predicate::str::contains("Installation aborted."));
    Ok(())
}

#[test]
fn run_without_answer_defaults_to_abort() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    install_tools()
        .current_dir(temp.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installation aborted."));
    Ok(())
}

#[test]
fn run_prompt_answered_by_environment() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    install_tools()
        .current_dir(temp.path())
        .env("INSTALL_TOOLS_PROMPT_CONTINUE", "no")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installation aborted."));
    Ok(())
}

#[test]
fn run_unknown_tool_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    install_tools()
        .args(["run", "--only", "kubectl,terraform"])
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown tool 'terraform'"));
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    install_tools()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("install-tools"));
    Ok(())
}
