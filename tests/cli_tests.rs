//! CLI argument parsing integration tests

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("configuration.json");
    fs::write(&path, content).expect("Failed to write test config");
    path.to_string_lossy().to_string()
}

#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("Commands:"));
    assert!(stdout.contains("top-user-langs"));
}

#[test]
fn test_cli_version_short_flag() {
    let output = Command::new("cargo")
        .args(["run", "--", "-v"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_invalid_subcommand() {
    let output = Command::new("cargo")
        .args(["run", "--", "invalid-command"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized subcommand") || stderr.contains("invalid"));
}

#[test]
fn test_legacy_print_ascii_flag() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, r#"{"ascii_art": ["EDISON-BANNER"]}"#);

    let output = Command::new("cargo")
        .args(["run", "--", "--no-color", "--config", &config, "-pa"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("EDISON-BANNER"));
}

#[test]
fn test_print_config_masks_token() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        r#"{"token": "0123456789abcdefWXYZ", "URI": "https://git.example.com"}"#,
    );

    let output = Command::new("cargo")
        .args(["run", "--", "--no-color", "--config", &config, "pc"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("WXYZ"));
    assert!(!stdout.contains("0123456789abcdef"));
    assert!(stdout.contains("https://git.example.com"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let output = Command::new("cargo")
        .args(["run", "--", "--config", "nonexistent.json", "print-ascii"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read configuration file"));
}

#[test]
fn test_network_command_without_settings_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "{}");

    let output = Command::new("cargo")
        .args(["run", "--", "--config", &config, "get-user"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not set"));
}

#[test]
fn test_top_user_langs_rejects_zero() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "{}");

    let output = Command::new("cargo")
        .args(["run", "--", "--config", &config, "tul", "--top", "0"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(!output.status.success());
}

#[test]
fn test_create_repo_visibility_conflict() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir, "{}");

    let output = Command::new("cargo")
        .args([
            "run", "--", "--config", &config, "cr", "--name", "x", "--private", "--public",
        ])
        .output()
        .expect("Failed to execute cargo run");

    assert!(!output.status.success());
}

#[test]
fn test_completions_bash() {
    let output = Command::new("cargo")
        .args(["run", "--", "completions", "bash"])
        .output()
        .expect("Failed to execute cargo run");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("edison"));
}
