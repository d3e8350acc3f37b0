//! # Speech Output (`common::speech`)
//!
//! File: cli/src/common/speech.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Replies are spoken through the [`Speech`] capability. Speaking is
//! fire-and-forget: the call blocks until the voice finishes, and any failure
//! is logged rather than returned, so a missing TTS program never interrupts
//! the conversation.
//!
//! - [`CommandVoice`] runs an external program (`espeak`, `say`, ...) with the
//!   text as its final argument.
//! - [`SilentVoice`] is used when speech is disabled or muted.
//!
use crate::common::process;
use crate::core::config::SpeechConfig;
use tracing::{debug, warn};

/// Capability to vocalize a line of text.
pub trait Speech {
    fn speak(&mut self, text: &str);
}

/// Speaks by invoking an external text-to-speech program.
#[derive(Debug, Clone)]
pub struct CommandVoice {
    program: String,
    args: Vec<String>,
}

impl CommandVoice {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Speech for CommandVoice {
    fn speak(&mut self, text: &str) {
        let mut args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args.push(text);
        if let Err(e) = process::run_quiet(&self.program, &args) {
            warn!("Speech output failed: {:#}", e);
        }
    }
}

/// Speech that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentVoice;

impl Speech for SilentVoice {
    fn speak(&mut self, text: &str) {
        debug!("(muted) {}", text);
    }
}

/// Picks the voice for a run. `--mute` arrives here as `enabled = false`.
pub fn voice_from_config(config: &SpeechConfig) -> Box<dyn Speech> {
    if !config.enabled {
        debug!("Speech disabled");
        Box::new(SilentVoice)
    } else {
        Box::new(CommandVoice::new(config.program.clone(), config.args.clone()))
    }
}

impl<S: Speech + ?Sized> Speech for Box<S> {
    fn speak(&mut self, text: &str) {
        (**self).speak(text)
    }
}
