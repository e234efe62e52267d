//! Integration tests for the credsim CLI

use std::io::Write;
use std::process::Command;

fn credsim() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_credsim"));
    // keep the user's config and environment out of the run
    command
        .env_remove("RUST_LOG")
        .env_remove("CREDSIM_OUTPUT")
        .env_remove("CREDSIM_COLOR")
        .env_remove("CREDSIM_SUCCESS_RATE")
        .env_remove("CREDSIM_NETWORK_DELAY_MS")
        .env_remove("CREDSIM_NO_DELAY")
        .env_remove("CREDSIM_ALLOWED_DOMAINS");
    command
}

fn input_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write input");
    file
}

fn empty_config(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").expect("write config");
    path
}

#[test]
fn test_cli_version() {
    let output = credsim()
        .arg("--version")
        .output()
        .expect("Failed to execute credsim");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("credsim"));
}

#[test]
fn test_cli_help() {
    let output = credsim()
        .arg("--help")
        .output()
        .expect("Failed to execute credsim");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Batch credential-verification simulator"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("validate"));
    assert!(stdout.contains("sample"));
}

#[test]
fn test_cli_short_and_long_help_share_summary() {
    for flag in ["-h", "--help"] {
        let output = credsim()
            .arg(flag)
            .output()
            .expect("Failed to execute credsim");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains("Batch credential-verification simulator"),
            "{flag} output lacks the summary: {stdout}"
        );
    }
}

#[test]
fn test_cli_invalid_command() {
    let output = credsim()
        .arg("invalid-command")
        .output()
        .expect("Failed to execute credsim");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn test_run_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let input = input_file("a@gmail.com:Password1\nbad\n b@yahoo.com:short \n\n");

    let output = credsim()
        .arg("--config")
        .arg(&config)
        .args(["--json", "run", "--no-delay", "--seed", "1"])
        .arg(input.path())
        .output()
        .expect("Failed to execute credsim");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let report = &json["report"];
    assert_eq!(report["total"], 3);
    assert_eq!(report["status"]["status"], "complete");
    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[1]["message"], "Invalid format");
    assert_eq!(outcomes[2]["message"], "Invalid credentials");
}

#[test]
fn test_run_exports_working_records() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[heuristic]\nsuccess_rate = 1.0\n").unwrap();
    let input = input_file("a@gmail.com:Password1\nbob:pw1234\nc@outlook.com:Secret99\n");
    let export = dir.path().join("working.txt");

    let output = credsim()
        .arg("--config")
        .arg(&config)
        .args(["--color", "never", "run", "--no-delay"])
        .arg(input.path())
        .arg("--export")
        .arg(&export)
        .output()
        .expect("Failed to execute credsim");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let exported = std::fs::read_to_string(&export).unwrap();
    assert_eq!(exported, "a@gmail.com:Password1\nc@outlook.com:Secret99\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Account active"));
    assert!(stdout.contains("Invalid email format"));
}

#[test]
fn test_run_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let output = credsim()
        .arg("--config")
        .arg(&config)
        .args(["run", "--no-delay"])
        .arg(dir.path().join("missing.txt"))
        .output()
        .expect("Failed to execute credsim");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.txt"));
    assert!(stderr.contains("Code: error.io"));
}

#[test]
fn test_validate_accepts_and_rejects() {
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);

    let good = input_file("a@b.com:x\n\nc@d.com:y\n");
    let output = credsim()
        .arg("--config")
        .arg(&config)
        .args(["--color", "never", "validate"])
        .arg(good.path())
        .output()
        .expect("Failed to execute credsim");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("2 record(s) accepted"));

    let bad = input_file("a@b.com:x\nnot-an-email:y\n");
    let output = credsim()
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg(bad.path())
        .output()
        .expect("Failed to execute credsim");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"));
    assert!(stderr.contains("Code: intake.invalid_format"));
}

#[test]
fn test_sample_writes_ten_lines() {
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let target = dir.path().join("sample.txt");

    let output = credsim()
        .arg("--config")
        .arg(&config)
        .args(["sample", "--output"])
        .arg(&target)
        .output()
        .expect("Failed to execute credsim");

    assert!(output.status.success());
    let written = std::fs::read_to_string(&target).unwrap();
    assert_eq!(written.lines().count(), 10);
    assert!(written.starts_with("user1@example.com:"));
}

#[test]
fn test_invalid_env_override_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let output = credsim()
        .env("CREDSIM_SUCCESS_RATE", "2.5")
        .arg("--config")
        .arg(&config)
        .arg("sample")
        .output()
        .expect("Failed to execute credsim");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("CREDSIM_SUCCESS_RATE"));
}
