//! # HAL9000 Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the subcommands of the `hal9000` binary. Each
//! command defines its own arguments structure and handler function, called
//! from `main.rs` with the loaded configuration.
//!

/// Interactive terminal session with the agent (the default command).
pub mod chat;
/// One-shot reply to a single line of text.
pub mod say;
