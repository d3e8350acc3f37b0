//! Pronoun reflection for captured text ("i am sad" becomes "you are sad").
//!
//! Phrases are matched on word boundaries, longest first, so "you are" wins
//! over "you" and "i'm" wins over "i". Phrases of equal length keep table order.
use crate::core::error::{HalError, Result};
use regex::{Captures, Regex, RegexBuilder};
use std::cmp::Reverse;
use std::collections::HashMap;

/// First/second person swaps used by the chat rules.
pub const ENGLISH: &[(&str, &str)] = &[
    ("i am", "you are"),
    ("i was", "you were"),
    ("i", "you"),
    ("i'm", "you are"),
    ("i'd", "you would"),
    ("i've", "you have"),
    ("i'll", "you will"),
    ("my", "your"),
    ("you are", "I am"),
    ("you were", "I was"),
    ("you've", "I have"),
    ("you'll", "I will"),
    ("your", "my"),
    ("yours", "mine"),
    ("you", "me"),
    ("me", "you"),
];

#[derive(Debug, Clone)]
pub struct Reflections {
    pattern: Option<Regex>,
    table: HashMap<String, String>,
}

impl Reflections {
    pub fn new(pairs: &[(&str, &str)]) -> Result<Self> {
        let mut phrases: Vec<&str> = pairs.iter().map(|(from, _)| *from).collect();
        phrases.sort_by_key(|phrase| Reverse(phrase.chars().count()));

        let pattern = if phrases.is_empty() {
            None
        } else {
            let alternation = phrases
                .iter()
                .map(|phrase| regex::escape(phrase))
                .collect::<Vec<_>>()
                .join("|");
            let source = format!(r"\b({})\b", alternation);
            let regex = RegexBuilder::new(&source)
                .case_insensitive(true)
                .build()
                .map_err(|source_err| HalError::Pattern {
                    pattern: source,
                    source: source_err,
                })?;
            Some(regex)
        };

        let table = pairs
            .iter()
            .map(|(from, to)| (from.to_lowercase(), to.to_string()))
            .collect();
        Ok(Self { pattern, table })
    }

    pub fn english() -> Result<Self> {
        Self::new(ENGLISH)
    }

    /// Lowercases `text` and swaps every reflected phrase in it.
    pub fn reflect(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let Some(pattern) = &self.pattern else {
            return lowered;
        };
        pattern
            .replace_all(&lowered, |caps: &Captures| {
                let phrase = &caps[0];
                self.table
                    .get(phrase)
                    .cloned()
                    .unwrap_or_else(|| phrase.to_string())
            })
            .into_owned()
    }
}
