//! # HAL9000 Agent
//!
//! File: cli/src/agent/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The agent is the conversational half of the demo. It owns a small piece of
//! state (where it is, which rooms exist, what is in them, how many replies it
//! has given) and reacts to three kinds of events:
//!
//! - **Free text** ([`Agent::on_input`]): answered by the rule-based [`Chat`],
//!   shown right-aligned on the display and spoken aloud. The very first
//!   reply of a session is prefixed with `"Hi, "`.
//! - **Commands** ([`Agent::on_command`]): `/quit`, `/relocate <room>`,
//!   `/rooms`. Anything else is answered with an "unknown command" line and a
//!   polite refusal.
//! - **Ticks** ([`Agent::update`]): called once per timer interval; currently a
//!   no-op hook.
//!
//! ## Architecture
//!
//! The agent depends only on capability traits: [`Display`] for output,
//! [`Speech`] for the voice, and [`EventLoop`] for quitting. The shell
//! (`commands::chat`) plugs in the terminal implementations; unit tests plug
//! in recording doubles.
//!
//! - `chat`: the generic rule engine
//! - `rules`: the HAL9000 rule table
//! - `reflections`: pronoun swaps applied to captured text
//! - `command`: `/command` parsing
//!
pub mod chat;
pub mod command;
pub mod reflections;
pub mod rules;

use crate::common::speech::Speech;
use crate::common::timer::TickEvent;
use crate::common::ui::{Align, Color, Display};
use crate::core::config::AgentConfig;
use crate::core::error::Result;
use chat::Chat;
use command::Command;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reflections::Reflections;
use std::collections::HashMap;
use tracing::{debug, info, trace};

pub const REPLY_COLOR: Color = Color::rgb(0x00, 0x80, 0x5A);
pub const STATUS_COLOR: Color = Color::rgb(0x40, 0x40, 0x40);
pub const ERROR_COLOR: Color = Color::rgb(0xff, 0x30, 0x00);

const GREETING: &str = "Hi, ";
const REFUSAL: &str = "I'm afraid I can't do that.";

/// Capability to stop the host's event loop.
pub trait EventLoop {
    fn exit(&mut self);
}

/// Everything the agent remembers during a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    /// Free-form; `"unknown"` until the first relocation.
    pub location: String,
    pub rooms: Vec<String>,
    pub room_items: HashMap<String, Vec<String>>,
    /// Number of free-text replies given so far.
    pub output_count: u64,
}

impl Default for AgentState {
    fn default() -> Self {
        let inventory: [(&str, [&str; 3]); 3] = [
            ("kitchen", ["fridge", "cooker", "gas tank"]),
            ("hangar", ["locked crate", "container", "shipping log"]),
            ("bridge", ["map", "control panel", "captain seat"]),
        ];
        Self {
            location: "unknown".to_string(),
            rooms: inventory.iter().map(|(room, _)| room.to_string()).collect(),
            room_items: inventory
                .iter()
                .map(|(room, items)| {
                    (
                        room.to_string(),
                        items.iter().map(|item| item.to_string()).collect(),
                    )
                })
                .collect(),
            output_count: 0,
        }
    }
}

impl AgentState {
    pub fn is_room(&self, name: &str) -> bool {
        self.rooms.iter().any(|room| room == name)
    }

    pub fn items_in(&self, room: &str) -> Option<&[String]> {
        self.room_items.get(room).map(Vec::as_slice)
    }
}

pub struct Agent<D: Display, V: Speech> {
    state: AgentState,
    chatbot: Chat,
    display: D,
    voice: V,
    strict_relocation: bool,
}

impl<D: Display, V: Speech> Agent<D, V> {
    /// Builds an agent with the HAL9000 rule table.
    ///
    /// ## Errors
    ///
    /// Fails only if a built-in rule pattern does not compile.
    pub fn new(display: D, voice: V, config: &AgentConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let chatbot = Chat::new(rules::hal_rules()?, Reflections::english()?, rng);
        Ok(Self {
            state: AgentState::default(),
            chatbot,
            display,
            voice,
            strict_relocation: config.strict_relocation,
        })
    }

    #[cfg(test)]
    pub fn state(&self) -> &AgentState {
        &self.state
    }

    #[cfg(test)]
    pub fn display(&self) -> &D {
        &self.display
    }

    #[cfg(test)]
    pub fn voice(&self) -> &V {
        &self.voice
    }

    /// Answers a line of free text.
    pub fn on_input(&mut self, text: &str) {
        let lowered = text.to_lowercase();
        let mut response = self
            .chatbot
            .respond(&lowered, &[("location", self.state.location.as_str())])
            .unwrap_or_default();
        if self.state.output_count == 0 {
            response.insert_str(0, GREETING);
        }
        debug!("Reply #{}: {}", self.state.output_count + 1, response);

        self.display.log(&response, Align::Right, REPLY_COLOR);
        self.voice.speak(&response);
        self.state.output_count += 1;
    }

    /// Executes a `/command` (text without the slash).
    pub fn on_command(&mut self, text: &str, event_loop: &mut dyn EventLoop) {
        match Command::parse(text) {
            Command::Quit => {
                info!("Quit requested");
                event_loop.exit();
            }
            Command::Relocate(target) => self.relocate(target),
            Command::Rooms => {
                let rooms = self
                    .state
                    .rooms
                    .iter()
                    .map(|room| format!("'{}'", room))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.status("");
                self.status(&format!("\u{2014} Valid rooms are: [{}]. \u{2014}", rooms));
            }
            Command::Unknown(text) => {
                debug!("Unknown command: {:?}", text);
                self.display.log(
                    &format!("Command `{}` unknown.", text),
                    Align::Left,
                    ERROR_COLOR,
                );
                self.display.log(REFUSAL, Align::Right, REPLY_COLOR);
            }
        }
    }

    /// Periodic hook driven by the shell's timer.
    pub fn update(&mut self, tick: TickEvent) {
        trace!(count = tick.count, elapsed = ?tick.elapsed, "tick");
    }

    fn relocate(&mut self, target: String) {
        if self.strict_relocation && !self.state.is_room(&target) {
            info!("Rejected relocation to {:?}", target);
            self.status("");
            self.status(&format!("\u{2014} {} is not a valid room. \u{2014}", target));
            return;
        }
        debug!(items = ?self.state.items_in(&target), "Relocating to {:?}", target);
        self.state.location = target;
        self.status("");
        self.status(&format!("\u{2014} Now in the {}. \u{2014}", self.state.location));
    }

    fn status(&mut self, text: &str) {
        self.display.log(text, Align::Center, STATUS_COLOR);
    }
}
