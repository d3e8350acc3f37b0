//! # HAL9000 One-Shot Reply
//!
//! File: cli/src/commands/say.rs
//! Author: Christi Mahu
//!
//! `hal9000 say <TEXT>...` feeds a single line of free text to a fresh agent,
//! prints the reply (and speaks it, unless muted), then exits. Since the agent
//! is fresh, the reply always carries the first-reply greeting.
//!
//! ```bash
//! hal9000 --mute say are you feeling better
//! ```
//!
use crate::agent::Agent;
use crate::common::speech;
use crate::common::ui::TerminalDisplay;
use crate::core::config::Config;
use crate::core::error::Result;
use clap::Args;
use tracing::info;

#[derive(Args, Debug)]
pub struct SayArgs {
    /// Words to say to HAL9000. Joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

pub fn handle_say(args: SayArgs, config: Config) -> Result<()> {
    info!("Handling say command with args: {:?}", args);
    let display = TerminalDisplay::stdout(config.display.width, config.display.color);
    let voice = speech::voice_from_config(&config.speech);
    let mut agent = Agent::new(display, voice, &config.agent)?;
    agent.on_input(&args.text.join(" "));
    Ok(())
}
