//! # HAL9000 Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements loading, merging, and validation of the HAL9000
//! configuration. Every setting has a default, so the demo runs with no
//! configuration file at all.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Command-line flags (`--mute`, `--seed`, `--no-color`), applied in `main.rs`
//!    before [`validate_config`] runs
//! 2. An explicit file given with `--config` / `HAL9000_CONFIG` (replaces 3 and 4)
//! 3. Project-specific `.hal9000.toml` in current directory or ancestors
//! 4. User-specific `<config dir>/hal9000/config.toml`
//! 5. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [agent]
//! name = "HAL9000"
//! operator = "Dave"
//! seed = 2001
//! strict_relocation = true
//!
//! [display]
//! width = 100
//! color = false
//!
//! [speech]
//! enabled = true
//! program = "~/bin/say-it"
//! args = ["-s", "140"]
//!
//! [timer]
//! interval_ms = 1000
//! ```
//!
use crate::core::error::{HalError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Narrowest terminal the centered/right-aligned layout is validated for.
pub const MIN_DISPLAY_WIDTH: usize = 20;
/// Widest display accepted; layout pads with this many spaces at most.
pub const MAX_DISPLAY_WIDTH: usize = 1000;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub timer: TimerConfig,
}

/// Settings for the conversational agent.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Name shown in the "joined" hint line.
    #[serde(default = "default_agent_name")]
    pub name: String,
    /// Name shown in the "started the chat" hint line.
    #[serde(default = "default_operator_name")]
    pub operator: String,
    /// Seed for reply selection. Unset means a fresh random seed per run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Reject `/relocate` targets that are not known rooms.
    #[serde(default)]
    pub strict_relocation: bool,
}

/// Settings for the terminal display.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Column count used to center and right-align lines.
    #[serde(default = "default_display_width")]
    pub width: usize,
    /// Emit ANSI colors.
    #[serde(default = "default_true")]
    pub color: bool,
}

/// Settings for the speech collaborator.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// Speak replies at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Text-to-speech program (can use ~). Will be expanded.
    #[serde(default = "default_speech_program")]
    pub program: String,
    /// Extra arguments placed before the spoken text.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Settings for the periodic tick.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TimerConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            operator: default_operator_name(),
            seed: None,
            strict_relocation: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: default_display_width(),
            color: true,
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: default_speech_program(),
            args: Vec::new(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_agent_name() -> String {
    "HAL9000".to_string()
}
fn default_operator_name() -> String {
    "Operator".to_string()
}
fn default_display_width() -> usize {
    80
}
fn default_true() -> bool {
    true
}
fn default_speech_program() -> String {
    if cfg!(target_os = "macos") {
        "say".to_string()
    } else {
        "espeak".to_string()
    }
}
fn default_interval_ms() -> u64 {
    1000
}

const PROJECT_CONFIG_FILENAME: &str = ".hal9000.toml";

/// Loads the effective configuration.
///
/// With an `explicit` path only that file is read (it must exist). Otherwise
/// the user and project files are merged over the defaults.
///
/// The result is not validated yet: callers apply their command-line
/// overrides first and then call [`validate_config`].
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    expand_config_paths(&mut config);
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "HAL9000", "hal9000") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    match find_project_config_path(&current_dir) {
        Some(path) => {
            info!("Loading project configuration from: {}", path.display());
            load_config_from_path(&path).map(Some)
        }
        None => {
            debug!("No project configuration file (.hal9000.toml) found in current directory or ancestors.");
            Ok(None)
        }
    }
}

/// Walks from `start` up to the filesystem root, stopping at the first
/// `.hal9000.toml` or at a directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    let defaults = Config::default();
    let mut merged = user;

    if project.agent.name != defaults.agent.name {
        merged.agent.name = project.agent.name;
    }
    if project.agent.operator != defaults.agent.operator {
        merged.agent.operator = project.agent.operator;
    }
    merged.agent.seed = project.agent.seed.or(merged.agent.seed);
    merged.agent.strict_relocation |= project.agent.strict_relocation;

    if project.display.width != defaults.display.width {
        merged.display.width = project.display.width;
    }
    if !project.display.color {
        merged.display.color = false;
    }

    if !project.speech.enabled {
        merged.speech.enabled = false;
    }
    if project.speech.program != defaults.speech.program {
        merged.speech.program = project.speech.program;
    }
    if !project.speech.args.is_empty() {
        merged.speech.args = project.speech.args;
    }

    if project.timer.interval_ms != defaults.timer.interval_ms {
        merged.timer.interval_ms = project.timer.interval_ms;
    }
    merged
}

fn expand_config_paths(config: &mut Config) {
    config.speech.program = shellexpand::tilde(&config.speech.program).into_owned();
    debug!("Expanded speech program: {}", config.speech.program);
}

pub fn validate_config(config: &Config) -> Result<()> {
    if config.display.width < MIN_DISPLAY_WIDTH {
        return Err(anyhow!(HalError::Config(format!(
            "display.width must be at least {}, got {}.",
            MIN_DISPLAY_WIDTH, config.display.width
        ))));
    }
    if config.display.width > MAX_DISPLAY_WIDTH {
        return Err(anyhow!(HalError::Config(format!(
            "display.width must be at most {}, got {}.",
            MAX_DISPLAY_WIDTH, config.display.width
        ))));
    }
    if config.timer.interval_ms == 0 {
        return Err(anyhow!(HalError::Config(
            "timer.interval_ms must be greater than zero.".to_string()
        )));
    }
    if config.speech.enabled && config.speech.program.trim().is_empty() {
        return Err(anyhow!(HalError::Config(
            "speech.program cannot be empty while speech is enabled.".to_string()
        )));
    }
    if config.agent.name.trim().is_empty() || config.agent.operator.trim().is_empty() {
        return Err(anyhow!(HalError::Config(
            "agent.name and agent.operator cannot be empty.".to_string()
        )));
    }
    Ok(())
}
