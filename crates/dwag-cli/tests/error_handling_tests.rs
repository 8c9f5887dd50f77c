//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dwag() -> Command {
    Command::cargo_bin("dwag").unwrap()
}

#[test]
fn populated_directory_without_force_fails_with_exit_2() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("svc");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("existing.txt"), "hi").unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["new", "svc", "--yes", "--skip-install"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not empty"))
        .stderr(predicate::str::contains("--force"));

    // Nothing was generated next to the existing file.
    assert!(!target.join("build.gradle").exists());
}

#[test]
fn letterless_name_fails_with_exit_2() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["new", "out", "--name", "12345", "--yes", "--skip-install"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("letter"));
}

#[test]
fn missing_templates_dir_fails_with_exit_4() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args([
            "new",
            "svc",
            "--yes",
            "--skip-install",
            "--templates-dir",
            "/no/such/templates",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("template directory not found"));
}

#[test]
fn empty_templates_dir_fails_with_exit_4() {
    let temp = TempDir::new().unwrap();
    let empty = temp.path().join("templates");
    std::fs::create_dir(&empty).unwrap();

    dwag()
        .current_dir(temp.path())
        .args([
            "new",
            "svc",
            "--yes",
            "--skip-install",
            "--templates-dir",
            empty.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn missing_config_file_fails_with_exit_4() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["--config", "/no/such/config.toml", "init", "--local"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn malformed_config_file_fails_with_exit_4() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("broken.toml");
    std::fs::write(&config, "defaults = 3").unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["--config", config.to_str().unwrap(), "init", "--local"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn unknown_subcommand_fails_with_exit_2() {
    dwag()
        .arg("frobnicate")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn no_arguments_prints_help_to_stderr() {
    dwag()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn errors_carry_suggestions() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("svc");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("x"), "y").unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["new", "svc", "--yes", "--skip-install"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"));
}
