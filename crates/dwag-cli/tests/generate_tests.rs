//! End-to-end tests for `dwag new` against a real filesystem.
//!
//! All invocations pass `--yes --skip-install` so no prompts fire and no
//! external tools (git, npm, ...) are required on the test machine.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dwag() -> Command {
    Command::cargo_bin("dwag").unwrap()
}

#[test]
fn help_shows_subcommands() {
    dwag()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    dwag()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generates_full_skeleton() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args([
            "new",
            "billing-portal",
            "--package",
            "com.acme.billing",
            "--yes",
            "--skip-install",
        ])
        .assert()
        .success();

    let root = temp.path().join("billing-portal");
    assert!(root.join("build.gradle").is_file());
    assert!(root.join("settings.gradle").is_file());
    assert!(root.join("gradlew").is_file());
    assert!(root.join("gradle/wrapper/gradle-wrapper.jar").is_file());
    assert!(root.join(".gitignore").is_file());

    // One directory per module, prefixed with the slug.
    assert!(root.join("billing-portal-distribution").is_dir());
    assert!(root.join("billing-portal-app/src/index.html").is_file());
    assert!(root.join("billing-portal-server/build.gradle").is_file());
}

#[test]
fn settings_gradle_has_slug_substituted() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["new", "billing-portal", "--yes", "--skip-install"])
        .assert()
        .success();

    let settings =
        std::fs::read_to_string(temp.path().join("billing-portal/settings.gradle")).unwrap();
    assert!(settings.contains("rootProject.name = 'billing-portal'"));
    assert!(settings.contains("include 'billing-portal-server'"));
    assert!(!settings.contains("{{slug}}"));
}

#[test]
fn java_sources_land_under_the_package_with_class_prefix() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args([
            "new",
            "portal",
            "--name",
            "billing portal",
            "--package",
            "com.acme.billing",
            "--yes",
            "--skip-install",
        ])
        .assert()
        .success();

    let java_root = temp
        .path()
        .join("portal/billing-portal-server/src/main/java/com/acme/billing");
    let app = java_root.join("BillingPortalApplication.java");
    assert!(app.is_file(), "missing {}", app.display());
    assert!(java_root.join("BillingPortalConfiguration.java").is_file());
    assert!(java_root.join("backend/DatabaseBackend.java").is_file());

    let source = std::fs::read_to_string(&app).unwrap();
    assert!(source.contains("package com.acme.billing;"));
    assert!(source.contains("class BillingPortalApplication"));
}

#[cfg(unix)]
#[test]
fn gradlew_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["new", "svc", "--yes", "--skip-install"])
        .assert()
        .success();

    let mode = std::fs::metadata(temp.path().join("svc/gradlew"))
        .unwrap()
        .permissions()
        .mode();
    assert_ne!(mode & 0o111, 0, "gradlew should have an executable bit");
}

#[test]
fn binary_payload_is_copied_byte_exact() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["new", "svc", "--yes", "--skip-install"])
        .assert()
        .success();

    let jar = std::fs::read(temp.path().join("svc/gradle/wrapper/gradle-wrapper.jar")).unwrap();
    assert!(jar.starts_with(b"PK"), "wrapper jar should keep its header");

    let keystore = std::fs::read(
        temp.path()
            .join("svc/svc-distribution/src/standard/var/conf/keyStore.jks"),
    )
    .unwrap();
    assert!(!keystore.is_empty());
    assert!(
        std::str::from_utf8(&keystore).is_err(),
        "keystore should be binary, not substituted text"
    );
}

#[test]
fn dry_run_lists_files_but_writes_nothing() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["new", "svc", "--yes", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("settings.gradle"))
        .stdout(predicate::str::contains("svc-server"));

    assert!(!temp.path().join("svc").exists());
}

#[test]
fn dry_run_json_is_parseable() {
    let temp = TempDir::new().unwrap();

    let output = dwag()
        .current_dir(temp.path())
        .args([
            "new",
            "svc",
            "--yes",
            "--dry-run",
            "--output-format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let plan: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(plan["project_name"], "svc");
    assert!(plan["manifests"].as_array().unwrap().len() >= 5);
}

#[test]
fn generating_into_dot_uses_directory_name() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("inventory");
    std::fs::create_dir(&project).unwrap();

    dwag()
        .current_dir(&project)
        .args(["new", "--yes", "--skip-install"])
        .assert()
        .success();

    assert!(project.join("inventory-server").is_dir());
}

#[test]
fn force_generates_into_populated_directory() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("README.md"), "existing").unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["new", "--name", "svc", "--yes", "--skip-install", "--force"])
        .assert()
        .success();

    assert!(temp.path().join("svc-server").is_dir());
    // Pre-existing files outside the manifests are left alone.
    assert_eq!(
        std::fs::read_to_string(temp.path().join("README.md")).unwrap(),
        "existing"
    );
}

#[test]
fn custom_templates_dir_overrides_payload() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");

    // Minimal but complete payload: reuse the real layout with one file
    // changed so we can tell which source was used.
    let embedded = env!("CARGO_MANIFEST_DIR");
    let source = std::path::Path::new(embedded)
        .parent()
        .unwrap()
        .join("dwag-adapters/templates");
    copy_tree(&source, &templates);
    std::fs::write(
        templates.join("gradle.properties"),
        "# custom payload for {{name}}\n",
    )
    .unwrap();

    let out = temp.path().join("out");
    dwag()
        .args([
            "new",
            out.to_str().unwrap(),
            "--name",
            "svc",
            "--yes",
            "--skip-install",
            "--templates-dir",
            templates.to_str().unwrap(),
        ])
        .assert()
        .success();

    let props = std::fs::read_to_string(out.join("gradle.properties")).unwrap();
    assert_eq!(props, "# custom payload for svc\n");
}

#[test]
fn init_local_writes_config() {
    let temp = TempDir::new().unwrap();

    dwag()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let config = std::fs::read_to_string(temp.path().join(".dwag.toml")).unwrap();
    assert!(config.contains("com.foobar.application"));

    // Second run without --force leaves the file alone and still succeeds.
    dwag()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn completions_emit_the_binary_name() {
    dwag()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dwag"));
}

fn copy_tree(from: &std::path::Path, to: &std::path::Path) {
    std::fs::create_dir_all(to).unwrap();
    for entry in std::fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let dest = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_tree(&entry.path(), &dest);
        } else {
            std::fs::copy(entry.path(), &dest).unwrap();
        }
    }
}
