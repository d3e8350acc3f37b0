//! # Chat Shell Loop (`commands::chat::shell`)
//!
//! File: cli/src/commands/chat/shell.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The [`Application`] wires the collaborators together: it prints the two
//! hint lines, builds the agent, starts the timer, and then dispatches events
//! one at a time until the agent asks the loop to exit or input runs out.
//!
//! Input and ticks are raced with a biased `tokio::select!`, so a pending
//! line is always handled before a tick that became due at the same moment.
//! Handlers run to completion before the next event is looked at.
//!
use crate::agent::{Agent, EventLoop};
use crate::common::input::{InputSource, TerminalEvent};
use crate::common::speech::Speech;
use crate::common::timer::Timer;
use crate::common::ui::{Align, Color, Display};
use crate::core::config::AgentConfig;
use crate::core::error::Result;
use tracing::{debug, info};

pub const HINT_COLOR: Color = Color::rgb(0x80, 0x80, 0x80);

/// Counters reported when a session ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub inputs: u64,
    pub commands: u64,
    pub ticks: u64,
}

#[derive(Debug, Default)]
struct LoopControl {
    exit_requested: bool,
}

impl EventLoop for LoopControl {
    fn exit(&mut self) {
        self.exit_requested = true;
    }
}

pub struct Application<D: Display, V: Speech> {
    agent: Agent<D, V>,
}

impl<D: Display, V: Speech> Application<D, V> {
    /// Writes the hint lines to `display`, then hands it to a new agent.
    pub fn new(mut display: D, voice: V, config: &AgentConfig) -> Result<Self> {
        display.log(
            &format!("{} started the chat.", config.operator),
            Align::Left,
            HINT_COLOR,
        );
        display.log(&format!("{} joined.", config.name), Align::Right, HINT_COLOR);
        let agent = Agent::new(display, voice, config)?;
        Ok(Self { agent })
    }

    /// Runs the event loop until `/quit` or until `input` closes.
    pub async fn run<I, T>(&mut self, input: &mut I, timer: &mut T) -> SessionStats
    where
        I: InputSource,
        T: Timer,
    {
        let mut control = LoopControl::default();
        let mut stats = SessionStats::default();
        timer.start();

        while !control.exit_requested {
            tokio::select! {
                biased;
                event = input.next_event() => match event {
                    TerminalEvent::Input(text) => {
                        stats.inputs += 1;
                        self.agent.on_input(&text);
                    }
                    TerminalEvent::Command(text) => {
                        stats.commands += 1;
                        self.agent.on_command(&text, &mut control);
                    }
                    TerminalEvent::Closed => {
                        debug!("Input closed, leaving the event loop");
                        control.exit();
                    }
                },
                tick = timer.tick() => {
                    stats.ticks += 1;
                    self.agent.update(tick);
                }
            }
        }

        info!(
            "Session ended after {} inputs, {} commands, {} ticks",
            stats.inputs, stats.commands, stats.ticks
        );
        stats
    }

    #[cfg(test)]
    fn agent(&self) -> &Agent<D, V> {
        &self.agent
    }
}
