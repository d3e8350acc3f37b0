//! # HAL9000 Interactive Chat
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `hal9000 chat` command (also what runs when no subcommand is given)
//! opens an interactive session with the agent in the current terminal.
//!
//! ## Architecture
//!
//! - `shell.rs`: the `Application` event loop, independent of the terminal
//!
//! `handle_chat` builds the real collaborators from the configuration
//! (stdout display, configured voice, rustyline input, interval timer) and
//! hands them to the shell.
//!
//! ## Examples
//!
//! ```bash
//! hal9000
//! hal9000 chat --prompt "dave> "
//! hal9000 --mute --seed 2001 chat
//! ```
//!
//! Inside the session, plain lines are conversation and lines starting with
//! `/` are commands: `/rooms`, `/relocate bridge`, `/quit`.
//!
use crate::common::input::TerminalInput;
use crate::common::speech;
use crate::common::timer::IntervalTimer;
use crate::common::ui::TerminalDisplay;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Args;
use std::time::Duration;
use tracing::info;

pub mod shell;

use shell::Application;

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Prompt shown while waiting for input.
    #[arg(long, default_value = "> ")]
    pub prompt: String,
}

impl Default for ChatArgs {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
        }
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs an interactive session until `/quit` or end of input.
///
/// ## Errors
///
/// Returns an error if the agent cannot be built or the terminal input
/// cannot be initialized.
pub async fn handle_chat(args: ChatArgs, config: Config) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let display = TerminalDisplay::stdout(config.display.width, config.display.color);
    let voice = speech::voice_from_config(&config.speech);
    let mut app = Application::new(display, voice, &config.agent)?;

    let mut input = TerminalInput::spawn(args.prompt)?;
    let mut timer = IntervalTimer::new(Duration::from_millis(config.timer.interval_ms));
    app.run(&mut input, &mut timer).await;

    Ok(())
}
