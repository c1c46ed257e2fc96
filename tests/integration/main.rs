//! Integration tests for the govmatch CLI
//!
//! These tests run the binary against a temporary data directory,
//! covering the cycle of: seed → schemes → check

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a govmatch command
fn govmatch() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("govmatch"));
    // Keep a developer's own config file out of the tests
    cmd.env("GOVMATCH_CONFIG", "");
    cmd.env("XDG_CONFIG_HOME", "/nonexistent");
    cmd
}

/// Helper to run govmatch against a data directory
fn govmatch_in(data: &TempDir) -> assert_cmd::Command {
    let mut cmd = govmatch();
    cmd.arg("--data-dir").arg(data.path());
    cmd
}

/// Data directory with the built-in catalogue and two profiles
fn seeded_data_dir() -> TempDir {
    let data = TempDir::new().unwrap();
    govmatch_in(&data).arg("seed").assert().success();

    fs::write(
        data.path().join("profiles.json"),
        r#"[
            {
                "id": "founder",
                "name": "Asha",
                "userType": "startup",
                "startupStage": "Ideation",
                "industry": "FinTech",
                "annualRevenue": "Pre-revenue",
                "numberOfEmployees": 4,
                "location": "Metro City",
                "existingGovernmentSupport": "No"
            },
            { "id": "angel", "userType": "investor" }
        ]"#,
    )
    .unwrap();

    data
}

#[test]
fn test_version() {
    govmatch()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_prints_hint() {
    govmatch().assert().success().stdout(predicate::str::contains("--help"));
}

#[test]
fn test_seed_then_skip() {
    let data = TempDir::new().unwrap();

    govmatch_in(&data)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded"));
    assert!(data.path().join("schemes.json").exists());

    govmatch_in(&data)
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("already"));

    govmatch_in(&data).args(["seed", "--force"]).assert().success();
}

#[test]
fn test_schemes_json_lists_catalogue() {
    let data = seeded_data_dir();

    let output = govmatch_in(&data).args(["--json", "schemes"]).output().unwrap();
    assert!(output.status.success());

    let schemes: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let schemes = schemes.as_array().unwrap();
    assert_eq!(schemes.len(), 7);
    assert!(schemes.iter().all(|s| s["id"].as_str().unwrap().starts_with("SCH-")));
}

#[test]
fn test_check_json_for_startup() {
    let data = seeded_data_dir();

    let output = govmatch_in(&data).args(["--json", "check", "founder"]).output().unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = results.as_array().unwrap();
    assert_eq!(results.len(), 7);
    assert_eq!(results[0]["schemeId"], "SCH-1");
    assert_eq!(results[0]["eligible"], true);
}

#[test]
fn test_check_investor_is_never_eligible() {
    let data = seeded_data_dir();

    let output = govmatch_in(&data).args(["--json", "check", "angel"]).output().unwrap();
    assert!(output.status.success());

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(results.as_array().unwrap().iter().all(|r| r["eligible"] == false));
}

#[test]
fn test_check_explain_human() {
    let data = seeded_data_dir();

    govmatch_in(&data)
        .args(["check", "founder", "--explain", "--sort", "matches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Startup India Seed Fund Scheme"));
}

#[test]
fn test_check_unknown_user_fails() {
    let data = seeded_data_dir();

    govmatch_in(&data)
        .args(["check", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("User not found"));
}

#[test]
fn test_check_rejects_bad_sort() {
    let data = seeded_data_dir();

    govmatch_in(&data)
        .args(["check", "founder", "--explain", "--sort", "newest"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort order"));
}

#[test]
fn test_invalid_config_fails() {
    let data = TempDir::new().unwrap();
    let config = data.path().join("config.toml");
    fs::write(&config, "[matching]\nrequired_matches = 0\n").unwrap();

    govmatch_in(&data)
        .arg("--config")
        .arg(&config)
        .arg("schemes")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required matches"));
}
