//! # Rule-Based Chat Engine (`agent::chat`)
//!
//! File: cli/src/agent/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A tiny Eliza-style responder. A [`Chat`] holds an ordered list of
//! [`Rule`]s; the first rule whose pattern matches the input supplies the
//! reply, so rules earlier in the list take priority.
//!
//! ## Matching
//!
//! - Patterns are case-insensitive and anchored at the start of the input only.
//!   An empty pattern therefore matches anything and works as a catch-all.
//! - One of the rule's templates is picked at random.
//! - `%N` in the template is replaced by capture group N, passed through
//!   [`Reflections`]. A group that did not participate is replaced by nothing.
//! - `{name}` placeholders are replaced from the variables given to
//!   [`Chat::respond`], after group substitution.
//! - A reply ending in `?.` or `??` is tidied to end in `.` or `?`.
//!
use super::reflections::Reflections;
use crate::core::error::{HalError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use regex::{Captures, Regex, RegexBuilder};

/// A pattern paired with the reply templates it can produce.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    responses: Vec<String>,
}

impl Rule {
    pub fn new(pattern: &str, responses: &[&str]) -> Result<Self> {
        let anchored = format!("^(?:{})", pattern);
        let regex = RegexBuilder::new(&anchored)
            .case_insensitive(true)
            .build()
            .map_err(|source| HalError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            pattern: regex,
            responses: responses.iter().map(|r| r.to_string()).collect(),
        })
    }
}

pub struct Chat {
    rules: Vec<Rule>,
    reflections: Reflections,
    rng: StdRng,
}

impl Chat {
    pub fn new(rules: Vec<Rule>, reflections: Reflections, rng: StdRng) -> Self {
        Self {
            rules,
            reflections,
            rng,
        }
    }

    /// Produces the reply for `input`, or `None` when no rule matches (or the
    /// matching rule has no templates).
    pub fn respond(&mut self, input: &str, vars: &[(&str, &str)]) -> Option<String> {
        let rule = self.rules.iter().find(|rule| rule.pattern.is_match(input))?;
        let caps = rule.pattern.captures(input)?;
        let template = rule.responses.choose(&mut self.rng)?;

        let mut reply = substitute_groups(template, &caps, &self.reflections);
        for (name, value) in vars {
            reply = reply.replace(&format!("{{{}}}", name), value);
        }
        Some(tidy_punctuation(reply))
    }
}

fn substitute_groups(template: &str, caps: &Captures, reflections: &Reflections) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        let group = match (c, chars.peek().and_then(|d| d.to_digit(10))) {
            ('%', Some(group)) => group,
            _ => {
                out.push(c);
                continue;
            }
        };
        chars.next();
        let captured = caps.get(group as usize).map_or("", |m| m.as_str());
        out.push_str(&reflections.reflect(captured));
    }
    out
}

fn tidy_punctuation(mut reply: String) -> String {
    if reply.ends_with("?.") {
        reply.truncate(reply.len() - 2);
        reply.push('.');
    } else if reply.ends_with("??") {
        reply.truncate(reply.len() - 2);
        reply.push('?');
    }
    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn chat(rules: Vec<Rule>) -> Chat {
        Chat::new(
            rules,
            Reflections::english().unwrap(),
            StdRng::seed_from_u64(9000),
        )
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let mut bot = chat(vec![
            Rule::new(r"hello(.*)", &["first"]).unwrap(),
            Rule::new(r"hel(.*)", &["second"]).unwrap(),
            Rule::new(r"", &["fallback"]).unwrap(),
        ]);
        assert_eq!(bot.respond("hello there", &[]).unwrap(), "first");
        assert_eq!(bot.respond("help", &[]).unwrap(), "second");
        assert_eq!(bot.respond("anything", &[]).unwrap(), "fallback");
    }

    #[test]
    fn test_patterns_anchor_at_start_only() {
        let mut bot = chat(vec![Rule::new(r"stop", &["stopping"]).unwrap()]);
        assert_eq!(bot.respond("stop right now", &[]).unwrap(), "stopping");
        assert!(bot.respond("please stop", &[]).is_none());
    }

    #[test]
    fn test_patterns_ignore_case() {
        let mut bot = chat(vec![Rule::new(r"open the (\w+)", &["No %1."]).unwrap()]);
        assert_eq!(bot.respond("OPEN THE Doors", &[]).unwrap(), "No doors.");
    }

    #[test]
    fn test_groups_are_reflected() {
        let mut bot = chat(vec![Rule::new(r"i think (.*)", &["Why do you think %1?"]).unwrap()]);
        assert_eq!(
            bot.respond("i think my plan is fine", &[]).unwrap(),
            "Why do you think your plan is fine?"
        );
    }

    #[test]
    fn test_missing_group_is_empty() {
        let mut bot = chat(vec![Rule::new(r"go(?: to (\w+))?", &["Going[%1]"]).unwrap()]);
        assert_eq!(bot.respond("go", &[]).unwrap(), "Going[]");
    }

    #[test]
    fn test_percent_without_digit_is_literal() {
        let mut bot = chat(vec![Rule::new(r"", &["100% sure"]).unwrap()]);
        assert_eq!(bot.respond("", &[]).unwrap(), "100% sure");
    }

    #[test]
    fn test_vars_are_not_reflected() {
        let mut bot = chat(vec![Rule::new(r"where", &["You are in the {location}."]).unwrap()]);
        assert_eq!(
            bot.respond("where", &[("location", "my lab")]).unwrap(),
            "You are in the my lab."
        );
    }

    #[test]
    fn test_trailing_punctuation_is_tidied() {
        let mut bot = chat(vec![Rule::new(r"(.*)", &["Really %1."]).unwrap()]);
        assert_eq!(bot.respond("so?", &[]).unwrap(), "Really so.");
        assert_eq!(tidy_punctuation("What??".into()), "What?");
        assert_eq!(tidy_punctuation("Fine.".into()), "Fine.");
    }

    #[test]
    fn test_reply_is_one_of_the_templates() {
        let mut bot = chat(vec![Rule::new(r"", &["a", "b", "c"]).unwrap()]);
        for _ in 0..20 {
            let reply = bot.respond("x", &[]).unwrap();
            assert!(["a", "b", "c"].contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_replies() {
        let rules = || vec![Rule::new(r"", &["a", "b", "c", "d"]).unwrap()];
        let mut left = chat(rules());
        let mut right = chat(rules());
        for _ in 0..10 {
            assert_eq!(left.respond("x", &[]), right.respond("x", &[]));
        }
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = Rule::new(r"(unclosed", &["x"]).unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }
}
