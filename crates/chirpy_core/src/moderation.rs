//! crates/chirpy_core/src/moderation.rs
//!
//! Length validation and profanity replacement for chirp bodies.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

/// Maximum chirp length, counted in characters rather than bytes.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words that are never allowed through to a stored chirp.
pub const BANNED_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const REPLACEMENT: &str = "****";

/// How banned words are located in a body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Only whitespace-delimited tokens that equal a banned word are replaced.
    /// Tokens are re-joined with single spaces.
    #[default]
    WholeWord,
    /// Any occurrence, even inside a longer token, is replaced. Whitespace is kept.
    Substring,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "whole_word" | "wholeword" | "word" => Ok(Self::WholeWord),
            "substring" => Ok(Self::Substring),
            other => Err(format!(
                "'{}' is not a valid match mode (expected 'whole_word' or 'substring')",
                other
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WholeWord => f.write_str("whole_word"),
            Self::Substring => f.write_str("substring"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModerationError {
    #[error("chirp is {length} characters, the limit is {max}")]
    TooLong { length: usize, max: usize },
}

impl ModerationError {
    /// Short machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::TooLong { .. } => "too_long",
        }
    }
}

/// Applies the length check and banned-word replacement to chirp bodies.
#[derive(Debug, Clone)]
pub struct Moderator {
    /// Compiled only in `MatchMode::Substring`.
    pattern: Option<Regex>,
}

impl Moderator {
    pub fn new(mode: MatchMode) -> Result<Self, regex::Error> {
        let pattern = match mode {
            MatchMode::WholeWord => None,
            MatchMode::Substring => {
                let alternation = BANNED_WORDS
                    .iter()
                    .map(|w| regex::escape(w))
                    .collect::<Vec<_>>()
                    .join("|");
                Some(RegexBuilder::new(&alternation).case_insensitive(true).build()?)
            }
        };
        Ok(Self { pattern })
    }

    /// Validates `body` and returns the cleaned text.
    pub fn moderate(&self, body: &str) -> Result<String, ModerationError> {
        let length = body.chars().count();
        if length > MAX_CHIRP_LENGTH {
            return Err(ModerationError::TooLong {
                length,
                max: MAX_CHIRP_LENGTH,
            });
        }

        let cleaned = match &self.pattern {
            Some(pattern) => pattern.replace_all(body, REPLACEMENT).into_owned(),
            None => replace_whole_words(body),
        };
        Ok(cleaned)
    }
}

fn replace_whole_words(body: &str) -> String {
    body.split_whitespace()
        .map(|token| {
            let lowered = token.to_lowercase();
            if BANNED_WORDS.contains(&lowered.as_str()) {
                REPLACEMENT
            } else {
                token
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
