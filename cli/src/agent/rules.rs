//! The HAL9000 conversation rules, highest priority first.
use super::chat::Rule;
use crate::core::error::Result;

const RULES: &[(&str, &[&str])] = &[
    (
        r"([\w\s]*?)where am i([\w\s]*?)([\?\.\!]??)",
        &["You are in the {location}."],
    ),
    (
        r"([\w\s]*?)you are ([\w\s]+)([\?\.\!]??)",
        &["Yes, I am %2.", "Oh, sooo %2."],
    ),
    (
        r"([\w\s]*?)are you ([\w\s]+)([\?\.\!]??)",
        &["Why would you think I am %2?", "Would you like me to be %2?"],
    ),
    // Catch-all: every input gets an answer.
    (r"", FALLBACK_REPLIES),
];

/// Replies of the catch-all rule.
pub const FALLBACK_REPLIES: &[&str] = &["Is everything OK?", "Can you still communicate?"];

pub fn hal_rules() -> Result<Vec<Rule>> {
    RULES
        .iter()
        .map(|(pattern, responses)| Rule::new(pattern, responses))
        .collect()
}
