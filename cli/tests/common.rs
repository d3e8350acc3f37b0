//! # HAL9000 Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `hal9000` binary against its own throwaway config file, so a
//! developer's real configuration (or a working TTS program) never changes
//! the outcome.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

/// Quiet, colorless, seeded configuration used by default.
pub const TEST_CONFIG: &str = r#"
[agent]
seed = 2001

[display]
color = false

[speech]
enabled = false
"#;

/// # Get HAL9000 Command (`hal_cmd`)
///
/// Returns a `Command` for the `hal9000` binary configured with `config`.
/// Keep the returned `TempDir` alive until the command has run.
///
/// ## Panics
/// Panics if the temp config cannot be written or the binary is missing.
pub fn hal_cmd_with_config(config: &str) -> (TempDir, Command) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let path = dir.path().join("hal9000.toml");
    fs::write(&path, config).expect("Failed to write test config");

    let mut cmd = Command::cargo_bin("hal9000").expect("Failed to find hal9000 binary for testing");
    cmd.env("HAL9000_CONFIG", &path).env_remove("RUST_LOG");
    (dir, cmd)
}

/// [`hal_cmd_with_config`] with [`TEST_CONFIG`].
pub fn hal_cmd() -> (TempDir, Command) {
    hal_cmd_with_config(TEST_CONFIG)
}
