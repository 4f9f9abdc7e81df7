//! Integration tests for the trimr CLI

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{isolated_config, run_trimr};

// ============================================================================
// Clamp
// ============================================================================

#[test]
fn clamp_beyond_right_edge_returns_max_start() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_trimr(
        &config,
        &["clamp", "0.95", "--total", "100", "--selection", "10"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0.9000");
}

#[test]
fn clamp_negative_request_returns_zero() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_trimr(
        &config,
        &["clamp", "-0.2", "--total", "100", "--selection", "10"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0.0000");
}

#[test]
fn clamp_window_longer_than_song_returns_zero() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_trimr(
        &config,
        &["clamp", "0.6", "--total", "90", "--selection", "120"],
    );

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0.0000");
}

#[test]
fn clamp_uses_configured_selection_length() {
    let (_temp, config) = isolated_config();
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "[selection]\nduration_secs = 20\n").unwrap();

    let (stdout, _stderr, exit_code) = run_trimr(&config, &["clamp", "0.95", "--total", "100"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0.8000");
}

#[test]
fn clamp_verbose_prints_range() {
    let (_temp, config) = isolated_config();
    Command::cargo_bin("trimr")
        .unwrap()
        .env("TRIMR_CONFIG", &config)
        .env("TRIMR_LOG", "off")
        .args(["clamp", "0.5", "--total", "100", "--selection", "10", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("max start:       0.9000"));
}

#[test]
fn clamp_floors_non_positive_total() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) =
        run_trimr(&config, &["clamp", "0.5", "--total", "0", "--selection", "1"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0.0000");

    let (stdout, _stderr, exit_code) =
        run_trimr(&config, &["clamp", "0.5", "--total", "-30", "--selection", "1"]);
    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), "0.0000");
}

#[test]
fn clamp_without_total_is_usage_error() {
    let (_temp, config) = isolated_config();
    let (_stdout, stderr, exit_code) = run_trimr(&config, &["clamp", "0.5"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("--total"));
}

#[test]
fn invalid_config_is_reported() {
    let (_temp, config) = isolated_config();
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "[selection\n").unwrap();

    let (_stdout, stderr, exit_code) = run_trimr(&config, &["clamp", "0.5", "--total", "10"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config file"), "stderr: {}", stderr);
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn keys_lists_default_key_times() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) =
        run_trimr(&config, &["keys", "--total", "100", "--selection", "10"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.lines().count(), 5);
    assert!(stdout.contains("[0]"));
    assert!(stdout.contains("85.0% - 95.0%"), "stdout: {}", stdout);
}

#[test]
fn keys_clamps_late_markers() {
    let (_temp, config) = isolated_config();
    fs::create_dir_all(config.parent().unwrap()).unwrap();
    fs::write(&config, "[timeline]\nkey_times = [0.95]\n").unwrap();

    let (stdout, _stderr, exit_code) =
        run_trimr(&config, &["keys", "--total", "100", "--selection", "10"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("90.0% - 100.0%"), "stdout: {}", stdout);
}

// ============================================================================
// Play
// ============================================================================

#[test]
fn play_fills_window_and_finishes() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_trimr(
        &config,
        &["play", "--total", "60", "--selection", "3", "--tick-ms", "10"],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Selection 0.0% - 5.0%"), "stdout: {}", stdout);
    assert!(stdout.contains("3/3s"), "stdout: {}", stdout);
    assert!(stdout.contains("Done at 0:03"), "stdout: {}", stdout);
}

#[test]
fn play_from_key_time() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_trimr(
        &config,
        &["play", "--total", "100", "--selection", "2", "--key", "2", "--tick-ms", "10"],
    );

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Selection 45.0% - 47.0%"), "stdout: {}", stdout);
    assert!(stdout.contains("Done at 0:47"), "stdout: {}", stdout);
}

#[test]
fn play_with_unknown_key_fails() {
    let (_temp, config) = isolated_config();
    let (_stdout, stderr, exit_code) =
        run_trimr(&config, &["play", "--total", "100", "--key", "7"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No key time at index 7"), "stderr: {}", stderr);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_trimr(&config, &["config", "path"]);

    assert_eq!(exit_code, 0);
    assert_eq!(stdout.trim(), config.display().to_string());
}

#[test]
fn config_show_prints_defaults() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_trimr(&config, &["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[selection]"));
    assert!(stdout.contains("duration_secs = 10"));
    assert!(stdout.contains("tick_interval_ms = 1000"));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let (_temp, config) = isolated_config();

    let (_stdout, _stderr, exit_code) = run_trimr(&config, &["config", "init"]);
    assert_eq!(exit_code, 0);
    assert!(config.exists());

    let (_stdout, stderr, exit_code) = run_trimr(&config, &["config", "init"]);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("already exists"));

    let (_stdout, _stderr, exit_code) = run_trimr(&config, &["config", "init", "--force"]);
    assert_eq!(exit_code, 0);
}

#[test]
fn version_flag_exits_0() {
    let (_temp, config) = isolated_config();
    let (stdout, _stderr, exit_code) = run_trimr(&config, &["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("trimr "));
}
