//! Recording test doubles for the agent's collaborators.
use crate::agent::EventLoop;
use crate::common::speech::Speech;
use crate::common::ui::{Align, Color, Display};

/// A line as it was handed to a display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub align: Align,
    pub color: Color,
}

#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub lines: Vec<Line>,
}

impl RecordingDisplay {
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

impl Display for RecordingDisplay {
    fn log(&mut self, text: &str, align: Align, color: Color) {
        self.lines.push(Line {
            text: text.to_string(),
            align,
            color,
        });
    }
}

#[derive(Debug, Default)]
pub struct RecordingVoice {
    pub spoken: Vec<String>,
}

impl Speech for RecordingVoice {
    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingLoop {
    pub exits: usize,
}

impl EventLoop for RecordingLoop {
    fn exit(&mut self) {
        self.exits += 1;
    }
}
