//! Parsing of `/command` text into the commands the agent understands.
//!
//! Matching is on the raw text (case sensitive). `quit` must match exactly;
//! `relocate` and `rooms` match as prefixes.

const RELOCATE: &str = "relocate";
/// Characters skipped before the relocation target: `"relocate "`.
const RELOCATE_TARGET_OFFSET: usize = RELOCATE.len() + 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    /// Target is everything after `"relocate "`, possibly empty.
    Relocate(String),
    Rooms,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(text: &'a str) -> Self {
        if text == "quit" {
            Command::Quit
        } else if text.starts_with(RELOCATE) {
            Command::Relocate(text.chars().skip(RELOCATE_TARGET_OFFSET).collect())
        } else if text.starts_with("rooms") {
            Command::Rooms
        } else {
            Command::Unknown(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_commands() {
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("rooms"), Command::Rooms);
        assert_eq!(Command::parse("rooms please"), Command::Rooms);
        assert_eq!(
            Command::parse("relocate bridge"),
            Command::Relocate("bridge".into())
        );
    }

    #[test]
    fn test_relocate_target_is_positional() {
        assert_eq!(Command::parse("relocate"), Command::Relocate(String::new()));
        // The separator is assumed, not checked.
        assert_eq!(
            Command::parse("relocatebridge"),
            Command::Relocate("ridge".into())
        );
        assert_eq!(
            Command::parse("relocate cabine \u{e0} vin"),
            Command::Relocate("cabine \u{e0} vin".into())
        );
    }

    #[test]
    fn test_everything_else_is_unknown() {
        assert_eq!(Command::parse("quit now"), Command::Unknown("quit now"));
        assert_eq!(Command::parse("Rooms"), Command::Unknown("Rooms"));
        assert_eq!(Command::parse(""), Command::Unknown(""));
    }
}
