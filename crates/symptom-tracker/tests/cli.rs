//! Runs the `symtrack` binary against a throwaway home directory.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn symtrack(home: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_symtrack"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env(
            "SYMTRACK_STORAGE__DATABASE_PATH",
            home.path().join("records.db"),
        )
        .env_remove("RUST_LOG");
    cmd
}

fn run_with_input(home: &TempDir, args: &[&str], input: &str) -> Output {
    let mut child = symtrack(home)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn record_count(home: &TempDir) -> u64 {
    let output = symtrack(home).args(["status", "--json"]).output().unwrap();
    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    status["record_count"].as_u64().unwrap()
}

#[test]
fn interactive_entry_closed_without_answers_saves_nothing() {
    let home = TempDir::new().unwrap();

    let output = run_with_input(&home, &["add", "--interactive"], "");
    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("記録を保存しました"));
    assert_eq!(record_count(&home), 0);
}

#[test]
fn interactive_entry_declined_saves_nothing() {
    let home = TempDir::new().unwrap();

    let output = run_with_input(&home, &["add", "-i"], "2024-01-05\n7\nn\n");
    assert!(output.status.success());
    assert_eq!(record_count(&home), 0);
}

#[test]
fn interactive_entry_confirmed_is_saved() {
    let home = TempDir::new().unwrap();

    let output = run_with_input(&home, &["add", "-i"], "2024-01-05\n7\n\n");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("記録を保存しました"));

    let list = symtrack(&home).arg("list").output().unwrap();
    assert_eq!(String::from_utf8_lossy(&list.stdout), "2024-01-05 / レベル: 7\n");
}

#[test]
fn config_validate_fails_on_invalid_file() {
    let home = TempDir::new().unwrap();
    let bad = home.path().join("bad.toml");
    std::fs::write(&bad, "[form]\ndefault_level = 42\n").unwrap();

    let output = symtrack(&home)
        .args(["config", "validate", "--file"])
        .arg(&bad)
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("form.default_level"));
}

#[test]
fn config_validate_runs_despite_broken_active_config() {
    let home = TempDir::new().unwrap();
    let broken = home.path().join("broken.toml");
    let good = home.path().join("good.toml");
    std::fs::write(&broken, "[chart]\ncolumn_width = 2\n").unwrap();
    std::fs::write(&good, "[form]\ndefault_level = 4\n").unwrap();

    let output = symtrack(&home)
        .arg("--config")
        .arg(&broken)
        .args(["config", "validate", "--file"])
        .arg(&good)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid."));

    // Commands that need the configuration still refuse it.
    let output = symtrack(&home)
        .arg("--config")
        .arg(&broken)
        .arg("show")
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn numeric_storage_key_from_environment() {
    let home = TempDir::new().unwrap();

    let output = symtrack(&home)
        .env("SYMTRACK_STORAGE__KEY", "123")
        .args(["status", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let status: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(status["storage_key"], "123");
}
