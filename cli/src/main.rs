//! # HAL9000 Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the HAL9000 terminal chat.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration and applying command-line overrides
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - `agent`: the conversational agent (state, rule engine, commands)
//! - `commands`: one module per subcommand (`chat`, `say`)
//! - `common`: the agent's collaborators (display, input, speech, timer)
//! - `core`: configuration and error types
//!
//! ## Examples
//!
//! ```bash
//! # Start a session (speech through espeak/say)
//! hal9000
//!
//! # Quiet, reproducible session with debug logs on stderr
//! hal9000 -vv --mute --seed 2001 chat
//!
//! # One reply and exit
//! hal9000 say where am i
//! ```
//!
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod agent; // The conversational agent
mod commands; // Subcommand handlers (chat, say)
mod common; // Display, input, speech, timer collaborators
mod core; // Core infrastructure (errors, config)

use crate::core::config::{self, Config};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "hal9000",
    about = "HAL9000: a toy terminal chatbot",
    long_about = "Chat with HAL9000 in the terminal. Plain lines are conversation;\n\
                  lines starting with '/' are commands (/rooms, /relocate <room>, /quit).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Read configuration only from this file.
    #[arg(long, env = "HAL9000_CONFIG", global = true)]
    config: Option<PathBuf>,
    /// Do not speak replies.
    #[arg(long, global = true)]
    mute: bool,
    /// Disable ANSI colors.
    #[arg(long, global = true)]
    no_color: bool,
    /// Seed for reply selection, for reproducible sessions.
    #[arg(long, global = true)]
    seed: Option<u64>,
}

/// Enum defining all available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "s")]
    Say(commands::say::SayArgs),
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if cli.mute {
        config.speech.enabled = false;
    }
    if cli.no_color {
        config.display.color = false;
    }
    if let Some(seed) = cli.seed {
        config.agent.seed = Some(seed);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::load_config(cli.config.as_deref())?;
    apply_cli_overrides(&mut config, &cli);
    config::validate_config(&config).context("Configuration validation failed")?;

    match cli.command {
        Some(Commands::Chat(args)) => commands::chat::handle_chat(args, config).await,
        Some(Commands::Say(args)) => commands::say::handle_say(args, config),
        None => commands::chat::handle_chat(Default::default(), config).await,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use predicates::prelude::*;

    fn hal_cmd() -> Command {
        Command::cargo_bin("hal9000").expect("Failed to find hal9000 binary for testing")
    }

    #[test]
    fn test_main_help_flag() {
        hal_cmd().arg("--help").assert().success();
    }

    #[test]
    fn test_main_version_flag() {
        hal_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_cli_overrides_apply() {
        let cli = Cli::parse_from(["hal9000", "--mute", "--no-color", "--seed", "7", "say", "hi"]);
        let mut config = Config::default();
        apply_cli_overrides(&mut config, &cli);

        assert!(!config.speech.enabled);
        assert!(!config.display.color);
        assert_eq!(config.agent.seed, Some(7));
    }

    #[test]
    fn test_no_subcommand_is_accepted() {
        let cli = Cli::parse_from(["hal9000", "-vv"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
    }
}
