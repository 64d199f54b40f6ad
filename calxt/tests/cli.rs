//! End-to-end tests for the calxt binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn calxt() -> Command {
    let mut cmd = Command::cargo_bin("calxt").unwrap();
    cmd.env_remove("CALXT_CONFIG")
        .env_remove("CALXT_VERBOSE")
        .env_remove("CALXT_NO_COLOR")
        .arg("--no-color");
    cmd
}

#[test]
fn test_tokens_expr_plain() {
    calxt()
        .args(["tokens", "--expr", "a==b"])
        .assert()
        .success()
        .stdout("identifier a\noperator ==\nidentifier b\nend of input\n");
}

#[test]
fn test_tokens_positions() {
    calxt()
        .args(["tokens", "-e", "x\n  + 1", "--positions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1:1\tidentifier x"))
        .stdout(predicate::str::contains("2:3\toperator +"));
}

#[test]
fn test_tokens_json() {
    let output = calxt()
        .args(["tokens", "--expr", "2 ^ n", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = value.as_array().unwrap();
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0]["kind"], "number");
    assert_eq!(tokens[1]["text"], "^");
    assert_eq!(tokens[1]["left_assoc"], false);
    assert_eq!(tokens[3]["kind"], "end of input");
}

#[test]
fn test_tokens_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "price * (1 + rate)").unwrap();

    calxt()
        .arg("tokens")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("identifier rate\ndelimiter ')'\nend of input"));
}

#[test]
fn test_tokens_stdin() {
    calxt()
        .args(["tokens", "-"])
        .write_stdin("'hi' && done")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("string \"hi\"\noperator &&"));
}

#[test]
fn test_tokens_missing_file() {
    calxt()
        .args(["tokens", "/nonexistent/input.calx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File operation failed"));
}

#[test]
fn test_tokens_requires_input() {
    calxt().arg("tokens").assert().failure();
}

#[test]
fn test_lex_error_diagnostic() {
    calxt()
        .args(["tokens", "--expr", "x = 1.2.3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error[E1002]: unexpected decimal separator"))
        .stderr(predicate::str::contains(" --> 1:8"))
        .stderr(predicate::str::contains("x = 1.2.3"));
}

#[test]
fn test_unterminated_string_diagnostic() {
    calxt()
        .args(["tokens", "--expr", "name == 'bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error[E1003]"))
        .stderr(predicate::str::contains("expected a closing '"));
}

#[test]
fn test_peek() {
    calxt()
        .args(["peek", "2", "--expr", "x + y"])
        .assert()
        .success()
        .stdout("identifier x\noperator +\n");
}

#[test]
fn test_peek_zero_prints_nothing() {
    calxt()
        .args(["peek", "0", "--expr", "x"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_config_file_sets_format() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("calxt.toml");
    std::fs::write(&config, "format = \"json\"\nmax_tokens = 2\n").unwrap();

    let output = calxt()
        .arg("--config")
        .arg(&config)
        .args(["tokens", "--expr", "a b c"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[test]
fn test_config_env_var() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("calxt.toml");
    std::fs::write(&config, "positions = true\n").unwrap();

    calxt()
        .env("CALXT_CONFIG", &config)
        .args(["tokens", "-e", "z"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1:1\tidentifier z"));
}

#[test]
fn test_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("calxt.toml");
    std::fs::write(&config, "format = \"json\"\n").unwrap();

    calxt()
        .arg("--config")
        .arg(&config)
        .args(["tokens", "-e", "z", "-F", "plain"])
        .assert()
        .success()
        .stdout("identifier z\nend of input\n");
}

#[test]
fn test_missing_config_file() {
    calxt()
        .args(["--config", "/nonexistent/calxt.toml", "tokens", "-e", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_config_save_and_show() {
    let dir = TempDir::new().unwrap();
    let saved = dir.path().join("out").join("calxt.toml");

    calxt()
        .current_dir(dir.path())
        .arg("config")
        .arg("--save")
        .arg(&saved)
        .assert()
        .success();
    assert!(saved.exists());

    calxt()
        .arg("--config")
        .arg(&saved)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_tokens = 10000"));
}

#[test]
fn test_version() {
    calxt()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("calxt "));
}
