//! Integration tests for the fitcalc binary.
//!
//! These tests verify end-to-end behavior including:
//! - Reference workout reports
//! - Delimited file and stdin input
//! - Skipping of bad records without aborting the batch
//! - Config file and output format handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SWIMMING_LINE: &str = "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
     Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.";
const RUNNING_LINE: &str = "Тип тренировки: Running; Длительность: 1.000 ч.; \
     Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805.";
const WALKING_LINE: &str = "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
     Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 349.252.";

/// Helper to create a test directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fitcalc"))
}

/// Write an input file and return its path
fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write input");
    path
}

/// Point the default config lookup into the temp dir so a user config never leaks in
fn isolated(cmd: &mut Command, dir: &TempDir) {
    cmd.env("XDG_CONFIG_HOME", dir.path())
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Workout distance, speed and calorie calculator",
        ));
}

#[test]
fn test_default_command_reports_reference_workouts() {
    let temp_dir = setup_test_dir();
    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);

    let expected = format!("{}\n{}\n{}\n", SWIMMING_LINE, RUNNING_LINE, WALKING_LINE);
    cmd.assert().success().stdout(expected);
}

#[test]
fn test_demo_subcommand_matches_default() {
    let temp_dir = setup_test_dir();
    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);

    cmd.arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains(RUNNING_LINE))
        .stderr(predicate::str::contains("skipped").not());
}

#[test]
fn test_report_from_file() {
    let temp_dir = setup_test_dir();
    let input = write_input(
        &temp_dir,
        "workouts.csv",
        "# type,action,duration,weight,...\nWLK,9000,1,75,180\nSWM,720,1,80,25,40\n",
    );

    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);
    cmd.arg("report")
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", WALKING_LINE, SWIMMING_LINE));
}

#[test]
fn test_bad_records_are_skipped_and_batch_continues() {
    let temp_dir = setup_test_dir();
    let input = write_input(
        &temp_dir,
        "mixed.csv",
        "XYZ,1,2,3\nRUN,15000,1,75\nWLK,9000,1,75,0\nSWM,720,1\nRUN,lots,1,75\n",
    );

    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);
    cmd.arg("report")
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("{}\n", RUNNING_LINE))
        .stderr(predicate::str::contains("Unknown workout type: \"XYZ\""))
        .stderr(predicate::str::contains("Invalid value for height: 0"))
        .stderr(predicate::str::contains("[SWM,720,1]"))
        .stderr(predicate::str::contains("action is not a number"))
        .stderr(predicate::str::contains("4 of 5 records skipped"));
}

#[test]
fn test_report_from_stdin() {
    let temp_dir = setup_test_dir();
    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);

    cmd.arg("report")
        .arg("-")
        .write_stdin("RUN,15000,1,75\n")
        .assert()
        .success()
        .stdout(format!("{}\n", RUNNING_LINE));
}

#[test]
fn test_json_format() {
    let temp_dir = setup_test_dir();
    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);

    let output = cmd
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run fitcalc");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("Each line should be JSON"))
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["workout_type"], "Swimming");
    assert_eq!(lines[2]["workout_type"], "SportsWalking");
    assert_eq!(lines[0]["calories"], 336.0);
}

#[test]
fn test_config_file_sets_delimiter_and_headers() {
    let temp_dir = setup_test_dir();
    let config = write_input(
        &temp_dir,
        "config.toml",
        "[input]\ndelimiter = \";\"\nhas_headers = true\n",
    );
    let input = write_input(
        &temp_dir,
        "workouts.csv",
        "type;action;duration;weight\nRUN;15000;1;75\n",
    );

    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);
    cmd.arg("--config")
        .arg(&config)
        .arg("report")
        .arg(&input)
        .assert()
        .success()
        .stdout(format!("{}\n", RUNNING_LINE));
}

#[test]
fn test_unknown_format_fails() {
    let temp_dir = setup_test_dir();
    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);

    cmd.arg("--format")
        .arg("yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format"));
}

#[test]
fn test_missing_input_file_fails() {
    let temp_dir = setup_test_dir();
    let mut cmd = cli();
    isolated(&mut cmd, &temp_dir);

    cmd.arg("report")
        .arg(temp_dir.path().join("missing.csv"))
        .assert()
        .failure();
}
