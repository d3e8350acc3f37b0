//! # HAL9000 Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrapper around `std::process::Command` for running an external program
//! to completion, with its output discarded. Used by the speech collaborator to
//! drive a text-to-speech binary. Non-zero exits are mapped into
//! `HalError::ExternalCommand`.
//!
use crate::core::error::{HalError, Result};
use anyhow::Context;
use std::process::{Command, Stdio};
use tracing::debug;

/// Runs `program` with `args`, blocking until it exits.
///
/// ## Errors
///
/// Returns an error if the program cannot be spawned or exits unsuccessfully.
pub fn run_quiet(program: &str, args: &[&str]) -> Result<()> {
    debug!("Running external command: {} {:?}", program, args);
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .with_context(|| format!("Failed to start '{}'", program))?;

    if status.success() {
        Ok(())
    } else {
        Err(HalError::ExternalCommand {
            cmd: format!("{} {}", program, args.join(" ")),
            status: status.to_string(),
        }
        .into())
    }
}
