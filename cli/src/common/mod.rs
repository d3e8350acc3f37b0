//! # HAL9000 Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module groups the collaborators the agent talks to, kept separate
//! from the conversational logic in `agent::` and the configuration in
//! `core::`. Each one is a small trait plus the implementation used at
//! runtime:
//!
//! - **`ui`**: the display surface (`Display`, `TerminalDisplay`).
//! - **`input`**: terminal events from the operator (`InputSource`, `TerminalInput`).
//! - **`speech`**: spoken replies (`Speech`, `CommandVoice`, `SilentVoice`).
//! - **`timer`**: the periodic tick (`Timer`, `IntervalTimer`).
//! - **`process`**: running external programs, used by `speech`.
//!

/// Terminal events typed by the operator.
pub mod input;
/// Running external programs to completion.
pub mod process;
/// Text-to-speech output.
pub mod speech;
/// Periodic tick source for the shell loop.
pub mod timer;
/// Display surface: styled lines on the terminal.
pub mod ui;

#[cfg(test)]
pub mod doubles;
