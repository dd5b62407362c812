use assert_cmd::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_logging_to_file() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    let log_file = root.join("datepick.log");

    let config_path = root.join("config.toml");
    let config_content = format!(
        r#"
version = 1

[logging]
level = "error"
file_level = "debug"
file = "{}"
"#,
        log_file.display()
    );
    fs::write(&config_path, &config_content).unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("datepick"));
    cmd.arg("--config").arg(&config_path).args(["check", "15-03-2021"]).assert().success();

    assert!(log_file.exists(), "Log file should be created");
    let log = fs::read_to_string(&log_file).unwrap();
    assert!(log.contains("date picker initialized"), "log was: {log}");
}

#[test]
fn test_logging_level_parsing() {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let config_path = root.join("config.toml");
    fs::write(&config_path, "version = 1\n[logging]\nlevel = \"trace\"\n").unwrap();

    let output = Command::new(assert_cmd::cargo::cargo_bin!("datepick"))
        .arg("--config")
        .arg(&config_path)
        .args(["check", "15-03-2021"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("date picker mounted"), "stderr was: {stderr}");
}
