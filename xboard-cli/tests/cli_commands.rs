//! Integration tests for the `xboard` binary.
//!
//! Each test runs the built binary with `HOME` pointed at a temporary
//! directory so configuration and logs never touch the real home.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run_cli(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xboard"))
        .args(args)
        .env("HOME", home)
        .env("USERPROFILE", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run xboard binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_suggest_prints_one_address_per_suffix() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["suggest", "alice"]);

    assert!(output.status.success());
    let lines: Vec<_> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "alice@qq.com");
    assert_eq!(lines[9], "alice@126.com");
}

#[test]
fn test_suggest_with_at_sign_prints_nothing() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["suggest", "bob@gm"]);

    assert!(output.status.success());
    assert!(stdout(&output).trim().is_empty());
}

#[test]
fn test_greeting_for_explicit_hour() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["greeting", "--hour", "15"]);

    assert!(output.status.success());
    assert!(stdout(&output).starts_with("下午好"));
}

#[test]
fn test_greeting_rejects_invalid_hour() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["greeting", "--hour", "24"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid argument"));
}

#[test]
fn test_link_encodes_url() {
    let home = TempDir::new().unwrap();
    let output = run_cli(
        home.path(),
        &["link", "clash-verge-rev", "--url", "https://example.com/api/v1/subscribe?token=123456"],
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "clash://install-config?url=https%3A%2F%2Fexample.com%2Fapi%2Fv1%2Fsubscribe%3Ftoken%3D123456"
    );
}

#[test]
fn test_link_unknown_client_fails() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["link", "netscape"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_then_get() {
    let home = TempDir::new().unwrap();

    let set = run_cli(home.path(), &["config", "set", "panel.user_name", "Amy"]);
    assert!(set.status.success());
    assert!(home.path().join(".xboard/config.ini").exists());

    let get = run_cli(home.path(), &["config", "get", "panel.user_name"]);
    assert_eq!(stdout(&get).trim(), "Amy");
}

#[test]
fn test_config_set_rejects_invalid_value() {
    let home = TempDir::new().unwrap();
    let output = run_cli(home.path(), &["config", "set", "verification.cooldown", "soon"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_disabled_quote_prints_fallback() {
    let home = TempDir::new().unwrap();
    run_cli(home.path(), &["config", "set", "quote.enabled", "false"]);

    let output = run_cli(home.path(), &["quote"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "每一天都是新的开始");
}

#[test]
fn test_configured_suffixes_drive_suggestions() {
    let home = TempDir::new().unwrap();
    run_cli(
        home.path(),
        &["config", "set", "email.suffixes", "example.org,example.net"],
    );

    let output = run_cli(home.path(), &["suggest", "kim"]);
    assert_eq!(stdout(&output), "kim@example.org\nkim@example.net\n");
}

#[test]
fn test_log_file_written_under_home() {
    let home = TempDir::new().unwrap();
    run_cli(home.path(), &["greeting", "--hour", "3"]);

    let log = home.path().join(".xboard/xboard.log");
    assert!(log.exists());
    let contents = fs::read_to_string(log).unwrap();
    assert!(contents.contains("greeting command"));
}
