use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("config.toml");
    let toml = r#"
version = 1

[attributes]
locale = "en"
start-date = "01-01-2020"
end-date = "31-12-2020"
disable-weekends = true
"#;
    write_file(&cfg, toml);

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("datepick"));
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   datepick doctor"))
        .stdout(predicate::str::contains("locale: en"))
        .stdout(predicate::str::contains("start_date: 2020-01-01"))
        .stdout(predicate::str::contains("disabled_weekdays: saturday, sunday"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let cfg_path = tmp.path().join("datepicker").join("config.toml");
    write_file(
        &cfg_path,
        r#"
version = 1
[attributes]
data-day-label-start = "previous"
"#,
    );

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("datepick"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   datepick doctor"))
        .stdout(predicate::str::contains("day_label_start: previous"));
}

#[test]
fn doctor_falls_back_to_defaults_without_config() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("datepick"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("path: (defaults)"))
        .stdout(predicate::str::contains("locale: nl"))
        .stdout(predicate::str::contains("textfield_format: DD-MM-YYYY"))
        .stdout(predicate::str::contains("start_date: 1900-01-01"))
        .stdout(predicate::str::contains("end_date: 2100-12-31"))
        .stdout(predicate::str::contains("disabled_weekdays: none"));
}
