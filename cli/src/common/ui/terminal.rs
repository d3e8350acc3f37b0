//! # Terminal Display (`common::ui::terminal`)
//!
//! File: cli/src/common/ui/terminal.rs
//! Author: Christi Mahu
//!
//! Writes display lines to a terminal (stdout by default), laid out within a
//! fixed width and colored with 24-bit ANSI escapes through `colored`.
//!
use super::{layout, Align, Color, Display};
use colored::Colorize;
use std::io::{self, Stdout, Write};
use tracing::warn;

/// [`Display`] implementation backed by any `Write` sink.
pub struct TerminalDisplay<W: Write = Stdout> {
    out: W,
    width: usize,
    color: bool,
}

impl TerminalDisplay<Stdout> {
    pub fn stdout(width: usize, color: bool) -> Self {
        Self::new(io::stdout(), width, color)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(out: W, width: usize, color: bool) -> Self {
        Self { out, width, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&self, text: &str, align: Align, color: Color) -> String {
        let line = layout(text, align, self.width);
        if self.color && !text.is_empty() {
            // Only the text is colored; the indent stays plain.
            let indent = line.len() - text.len();
            format!(
                "{}{}",
                &line[..indent],
                text.truecolor(color.r, color.g, color.b)
            )
        } else {
            line
        }
    }
}

impl<W: Write> Display for TerminalDisplay<W> {
    fn log(&mut self, text: &str, align: Align, color: Color) {
        let rendered = self.render(text, align, color);
        if let Err(e) = writeln!(self.out, "{}", rendered).and_then(|_| self.out.flush()) {
            warn!("Failed to write display line: {}", e);
        }
    }
}
