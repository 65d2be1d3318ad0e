/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use common::FireSessionsBuilder;

fn fire2adium() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fire2adium"))
}

#[test]
fn test_cli_migrates_and_prints_summary() {
    let source = FireSessionsBuilder::new()
        .with_folder("alice-AIM", &[("2011-05-09,log1.html", "hello")])
        .build();
    let destination = TempDir::new().unwrap();

    fire2adium()
        .arg("--source-root")
        .arg(source.path())
        .arg("--destination-root")
        .arg(destination.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Folders processed: 1"))
        .stdout(predicate::str::contains("Files seen: 1"))
        .stdout(predicate::str::contains("Files copied: 1"))
        .stdout(predicate::str::contains("Files skipped (malformed name): 0"))
        .stdout(predicate::str::contains("Files failed (I/O error): 0"));

    let copied = destination
        .path()
        .join("AIM.Fire Import")
        .join("alice")
        .join("alice (2011|05|09).html");
    assert_eq!(fs::read_to_string(copied).unwrap(), "hello");
}

#[test]
fn test_cli_skips_are_reported_but_exit_zero() {
    let source = FireSessionsBuilder::new()
        .with_folder("alice-AIM", &[
            ("2012,chat.html", "bad"),
            ("2011-05-09,good.html", "good"),
        ])
        .with_folder("bobAIM", &[("2011-05-09,log.html", "orphan")])
        .build();
    let destination = TempDir::new().unwrap();

    fire2adium()
        .arg("--source-root")
        .arg(source.path())
        .arg("--destination-root")
        .arg(destination.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Folders skipped: 1"))
        .stdout(predicate::str::contains("Files seen: 2"))
        .stdout(predicate::str::contains("Files skipped (malformed name): 1"))
        .stderr(predicate::str::contains("Warning: Skipping folder bobAIM"))
        .stderr(predicate::str::contains("Warning: Skipping file"));
}

#[test]
fn test_cli_missing_source_root_fails() {
    let destination = TempDir::new().unwrap();

    fire2adium()
        .arg("--source-root")
        .arg("/nonexistent/fire/sessions")
        .arg("--destination-root")
        .arg(destination.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source root does not exist"));
}

#[test]
fn test_cli_custom_service_and_label() {
    let source = FireSessionsBuilder::new()
        .with_folder("alice-MSN", &[("2011-05-09,log.html", "hi")])
        .build();
    let destination = TempDir::new().unwrap();

    fire2adium()
        .arg("--source-root")
        .arg(source.path())
        .arg("--destination-root")
        .arg(destination.path())
        .arg("--service")
        .arg("MSN")
        .arg("--account-label")
        .arg("Old Logs")
        .assert()
        .success();

    assert!(destination
        .path()
        .join("MSN.Old Logs")
        .join("alice")
        .join("alice (2011|05|09).html")
        .is_file());
}

#[test]
fn test_cli_config_file_overridden_by_flags() {
    let source = FireSessionsBuilder::new()
        .with_folder("alice-AIM", &[("2011-05-09,log.html", "hi")])
        .build();
    let destination = TempDir::new().unwrap();

    let config_path = destination.path().join("fire2adium.json");
    fs::write(
        &config_path,
        format!(
            r#"{{"source_root":{},"destination_root":{},"service_name":"Jabber"}}"#,
            serde_json::to_string(source.path()).unwrap(),
            serde_json::to_string(destination.path()).unwrap(),
        ),
    )
    .unwrap();

    fire2adium()
        .arg("--config")
        .arg(&config_path)
        .arg("--service")
        .arg("AIM")
        .assert()
        .success();

    // Flag value wins over the file's "Jabber"
    assert!(destination.path().join("AIM.Fire Import").join("alice").is_dir());
    assert!(!destination.path().join("Jabber.Fire Import").exists());
}

#[test]
fn test_cli_bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("broken.json");
    fs::write(&config_path, "{not json").unwrap();

    fire2adium()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_cli_help_flag() {
    fire2adium()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Migrate Fire.app chat logs"))
        .stdout(predicate::str::contains("--source-root"))
        .stdout(predicate::str::contains("--account-label"));
}

#[test]
fn test_cli_version_flag() {
    fire2adium().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_unknown_flag_fails() {
    fire2adium().arg("--frobnicate").assert().failure();
}
