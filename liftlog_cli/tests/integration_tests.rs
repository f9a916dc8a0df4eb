//! Integration tests for the liftlog binary.
//!
//! These tests verify end-to-end behavior including:
//! - Streak evaluation from an activity log file
//! - Rep-max estimates and rejection of unreliable input
//! - Plate loading with config and flag overrides

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Helper to create an isolated directory that also hosts the config home
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from the user's real config
fn cli(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("liftlog"));
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_log(dir: &Path, lines: &[&str]) -> PathBuf {
    let path = dir.join("activity.txt");
    fs::write(&path, lines.join("\n")).expect("Failed to write activity log");
    path
}

fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().expect("Failed to run liftlog");
    assert!(output.status.success(), "liftlog failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("Output was not JSON")
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Training consistency and barbell math",
        ));
}

#[test]
fn test_streak_active_week() {
    let temp_dir = setup_test_dir();
    let log = write_log(
        temp_dir.path(),
        &["# this week", "2024-05-12", "2024-05-13", "2024-05-14", "2024-05-15"],
    );

    cli(&temp_dir)
        .args(["streak", "--today", "2024-05-15", "--file"])
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("State: active"))
        .stdout(predicate::str::contains("Streak: 4 days"))
        .stdout(predicate::str::contains("Skips remaining: 2"))
        .stdout(predicate::str::contains("Skip budget resets: 2024-05-19"));
}

#[test]
fn test_streak_json_reports_break() {
    let temp_dir = setup_test_dir();
    let log = write_log(temp_dir.path(), &["2024-05-12"]);

    let json = json_output(
        cli(&temp_dir)
            .args(["streak", "--json", "--today", "2024-05-15", "--file"])
            .arg(&log),
    );

    assert_eq!(json["today"], "2024-05-15");
    assert_eq!(json["state"], "broken");
    assert_eq!(json["broke_today"], true);
    assert_eq!(json["streak_days"], 0);
    assert_eq!(json["skips_remaining"], 0);
    assert!(json.get("weeks").is_none());
}

#[test]
fn test_streak_weeks_breakdown() {
    let temp_dir = setup_test_dir();
    let log = write_log(
        temp_dir.path(),
        &[
            "2024-04-28",
            "2024-05-05",
            "2024-05-06",
            "2024-05-07",
            "2024-05-08",
            "2024-05-09",
            "2024-05-10",
            "2024-05-11",
            "2024-05-12",
        ],
    );

    let json = json_output(
        cli(&temp_dir)
            .args(["streak", "--json", "--weeks", "--today", "2024-05-12", "--file"])
            .arg(&log),
    );

    assert_eq!(json["state"], "active");
    assert_eq!(json["streak_days"], 8);
    let weeks = json["weeks"].as_array().expect("weeks array");
    assert_eq!(weeks.len(), 3);
    assert_eq!(weeks[2]["week_start"], "2024-04-28");
    assert_eq!(weeks[2]["counted"], false);
}

#[test]
fn test_streak_rejects_bad_date() {
    let temp_dir = setup_test_dir();
    let log = write_log(temp_dir.path(), &["2024-05-12", "last tuesday"]);

    cli(&temp_dir)
        .args(["streak", "--today", "2024-05-15", "--file"])
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line: 2"));
}

#[test]
fn test_streak_missing_file_fails() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["streak", "--file"])
        .arg(temp_dir.path().join("missing.txt"))
        .assert()
        .failure();
}

#[test]
fn test_e1rm_rounds_by_default() {
    let temp_dir = setup_test_dir();

    let json = json_output(cli(&temp_dir).args(["e1rm", "225", "5", "--json"]));

    // 225 * (1 + 5/30) = 262.5
    assert_eq!(json["e1rm"], 262.5);
    // 262.5 / (4/3) = 196.875 -> 197.5
    assert_eq!(json["e10rm"], 197.5);
}

#[test]
fn test_e1rm_unrounded_with_config() {
    let temp_dir = setup_test_dir();
    let config_path = temp_dir.path().join("custom.toml");
    fs::write(&config_path, "[rep_max]\nround_estimates = false\n").unwrap();

    let json = json_output(
        cli(&temp_dir)
            .args(["e1rm", "225", "5", "--json", "--config"])
            .arg(&config_path),
    );

    assert_eq!(json["e10rm"], 196.875);
}

#[test]
fn test_e1rm_rejects_unreliable_reps() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["e1rm", "100", "16"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));

    cli(&temp_dir)
        .args(["e1rm", "-5", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn test_plates_text_output() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["plates", "160"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per side: 45 + 10 + 2.5 (57.5)"))
        .stdout(predicate::str::contains("blue"))
        .stdout(predicate::str::contains("Total: 160"))
        .stdout(predicate::str::contains("not exact").not());
}

#[test]
fn test_plates_inexact_json() {
    let temp_dir = setup_test_dir();

    let json = json_output(cli(&temp_dir).args(["plates", "137", "--json"]));

    assert_eq!(json["plates"], serde_json::json!([45.0]));
    assert_eq!(json["total_weight"], 135.0);
    assert_eq!(json["is_exact"], false);
    assert_eq!(json["colors"], serde_json::json!(["blue"]));
}

#[test]
fn test_verbose_logs_plate_overrides() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["plates", "100", "--bar", "20", "--sides", "1", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per side: 45 + 35 (80)"))
        .stderr(predicate::str::contains("Bar weight overridden to 20"))
        .stderr(predicate::str::contains("Loading sides overridden to 1"));
}

#[test]
fn test_plates_bar_only() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["plates", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Per side: Bar only"));
}

#[test]
fn test_plates_flag_overrides() {
    let temp_dir = setup_test_dir();

    let json = json_output(cli(&temp_dir).args([
        "plates", "100", "--bar", "20", "--plates", "20,15,10,5", "--json",
    ]));

    assert_eq!(json["bar_weight"], 20.0);
    assert_eq!(json["plates"], serde_json::json!([20.0, 20.0]));
    assert_eq!(json["is_exact"], true);
}

#[test]
fn test_plates_config_from_config_home() {
    let temp_dir = setup_test_dir();
    let config_dir = temp_dir.path().join("config").join("liftlog");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.toml"),
        "[plates]\nbar_weight = 20\navailable = [25, 10]\n",
    )
    .unwrap();

    let json = json_output(cli(&temp_dir).args(["plates", "90", "--json"]));

    assert_eq!(json["bar_weight"], 20.0);
    assert_eq!(json["plates"], serde_json::json!([25.0, 10.0]));
}

#[test]
fn test_plates_rejects_zero_sides() {
    let temp_dir = setup_test_dir();

    cli(&temp_dir)
        .args(["plates", "135", "--sides", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading_sides"));
}
