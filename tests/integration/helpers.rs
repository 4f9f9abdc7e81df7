//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// A temporary config location that does not exist yet.
pub fn isolated_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("trimr").join("config.toml");
    (temp_dir, path)
}

/// Run the trimr binary against `config_path` and capture output.
pub fn run_trimr(config_path: &PathBuf, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_trimr"))
        .args(args)
        .env("TRIMR_CONFIG", config_path)
        .env_remove("TRIMR_LOG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute trimr");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
