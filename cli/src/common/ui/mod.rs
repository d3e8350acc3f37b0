//! # HAL9000 Display Surface (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The display is where the operator reads the conversation. Everything the
//! agent and shell print goes through the [`Display`] trait as one styled line
//! at a time: the text, an alignment, and a color. The agent never writes to
//! stdout directly, so tests can swap in a recording display.
//!
//! ## Architecture
//!
//! - [`Display`]: the capability trait (`log(text, align, color)`)
//! - [`Align`] / [`Color`]: line styling
//! - [`layout`]: pads a line for a given width (pure, unit tested)
//! - `terminal`: [`TerminalDisplay`], the stdout implementation with ANSI colors
//!
pub mod terminal;

pub use terminal::TerminalDisplay;

/// Horizontal placement of a line on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Capability to append a styled line to the display surface.
pub trait Display {
    fn log(&mut self, text: &str, align: Align, color: Color);
}

/// Pads `text` so it sits at `align` within `width` columns.
///
/// Width is counted in characters. Lines at least as wide as the display are
/// returned unchanged. Padding only ever goes in front of the text, so a
/// centered empty line is `width / 2` spaces.
pub fn layout(text: &str, align: Align, width: usize) -> String {
    let len = text.chars().count();
    let spare = width.saturating_sub(len);
    let indent = match align {
        Align::Left => 0,
        Align::Center => spare / 2,
        Align::Right => spare,
    };
    format!("{}{}", " ".repeat(indent), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_left_is_untouched() {
        assert_eq!(layout("hello", Align::Left, 20), "hello");
    }

    #[test]
    fn test_layout_right_fills_width() {
        let line = layout("hello", Align::Right, 20);
        assert_eq!(line.len(), 20);
        assert!(line.ends_with("hello"));
    }

    #[test]
    fn test_layout_center_counts_chars_not_bytes() {
        // The em dash is three bytes but one column.
        let line = layout("\u{2014} ok \u{2014}", Align::Center, 12);
        assert_eq!(line, "   \u{2014} ok \u{2014}");
    }

    #[test]
    fn test_layout_overlong_line_not_padded() {
        let text = "x".repeat(30);
        assert_eq!(layout(&text, Align::Right, 20), text);
    }

    #[test]
    fn test_layout_pads_only_in_front() {
        assert_eq!(layout("", Align::Center, 20), " ".repeat(10));
        assert_eq!(layout("ab", Align::Center, 20), format!("{}ab", " ".repeat(9)));
        assert!(!layout("ab", Align::Left, 20).ends_with(' '));
    }
}
