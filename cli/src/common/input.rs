//! # Terminal Input Events (`common::input`)
//!
//! File: cli/src/common/input.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns what the operator types into events for the shell loop:
//! - a line starting with `/` becomes [`TerminalEvent::Command`] (slash removed)
//! - any other non-blank line becomes [`TerminalEvent::Input`]
//! - end of input (EOF, Ctrl-C, Ctrl-D) becomes [`TerminalEvent::Closed`]
//!
//! ## Architecture
//!
//! `rustyline` blocks while it waits for a line, so [`TerminalInput`] runs the
//! editor on a dedicated thread and forwards events over a tokio channel. The
//! thread only prompts when the shell asks for the next event; after `/quit`
//! nobody asks again, so the terminal is never left in raw mode mid-prompt.
//!
use crate::core::error::{HalError, Result};
use anyhow::Context;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::sync::mpsc as std_mpsc;
use std::thread;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Something the operator did at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Free text to converse with.
    Input(String),
    /// The text of a `/command`, without the slash.
    Command(String),
    /// No more input will arrive.
    Closed,
}

/// Source of terminal events consumed by the shell loop.
///
/// `next_event` must be cancel safe: the shell races it against the timer.
pub trait InputSource {
    async fn next_event(&mut self) -> TerminalEvent;
}

/// Classifies one raw line. Blank lines produce no event.
pub fn parse_line(line: &str) -> Option<TerminalEvent> {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    if line.trim().is_empty() {
        return None;
    }
    match line.strip_prefix('/') {
        Some(command) => Some(TerminalEvent::Command(command.to_string())),
        None => Some(TerminalEvent::Input(line.to_string())),
    }
}

/// Interactive [`InputSource`] reading the terminal with `rustyline`.
pub struct TerminalInput {
    demand: std_mpsc::Sender<()>,
    events: mpsc::UnboundedReceiver<TerminalEvent>,
    pending: bool,
}

impl TerminalInput {
    /// Starts the reader thread. Fails if the line editor cannot be created.
    pub fn spawn(prompt: impl Into<String>) -> Result<Self> {
        let prompt = prompt.into();
        let (demand_tx, demand_rx) = std_mpsc::channel::<()>();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = std_mpsc::channel();

        thread::Builder::new()
            .name("hal9000-input".into())
            .spawn(move || {
                let mut editor = match DefaultEditor::new() {
                    Ok(editor) => {
                        let _ = ready_tx.send(Ok(()));
                        editor
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };
                read_lines(&mut editor, &prompt, &demand_rx, &event_tx);
                debug!("Input reader finished");
            })
            .context("Failed to spawn terminal input thread")?;

        ready_rx
            .recv()
            .context("Terminal input thread exited during startup")?
            .map_err(HalError::from)?;

        Ok(Self {
            demand: demand_tx,
            events: event_rx,
            pending: false,
        })
    }
}

fn read_lines(
    editor: &mut DefaultEditor,
    prompt: &str,
    demand: &std_mpsc::Receiver<()>,
    events: &mpsc::UnboundedSender<TerminalEvent>,
) {
    while demand.recv().is_ok() {
        let event = loop {
            match editor.readline(prompt) {
                Ok(line) => {
                    if let Some(event) = parse_line(&line) {
                        let _ = editor.add_history_entry(line.as_str());
                        break event;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    break TerminalEvent::Closed
                }
                Err(e) => {
                    warn!("Terminal input failed: {}", e);
                    break TerminalEvent::Closed;
                }
            }
        };
        let closed = event == TerminalEvent::Closed;
        if events.send(event).is_err() || closed {
            return;
        }
    }
}

impl InputSource for TerminalInput {
    async fn next_event(&mut self) -> TerminalEvent {
        if !self.pending {
            if self.demand.send(()).is_err() {
                return TerminalEvent::Closed;
            }
            self.pending = true;
        }
        let event = self.events.recv().await.unwrap_or(TerminalEvent::Closed);
        self.pending = false;
        event
    }
}
