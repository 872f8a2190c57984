//! Validation and cleanup of raw user answers.

use std::collections::HashSet;
use thiserror::Error;

/// Default lower bound on answer length, in characters.
pub const MIN_INPUT_LENGTH: usize = 2;

/// Default upper bound on answer length, in characters.
pub const MAX_INPUT_LENGTH: usize = 200;

/// Why an answer was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputRejection {
    #[error("Answer is empty")]
    Empty,

    #[error("Answer too short: {actual} characters, minimum is {min}")]
    TooShort { min: usize, actual: usize },

    #[error("Answer too long: {actual} characters, maximum is {max}")]
    TooLong { max: usize, actual: usize },

    #[error("Answer is a single repeated character")]
    RepeatedCharacter,
}

/// Guards the extractor against empty, flooded or spammed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSanitizer {
    min_length: usize,
    max_length: usize,
}

impl Default for InputSanitizer {
    fn default() -> Self {
        Self {
            min_length: MIN_INPUT_LENGTH,
            max_length: MAX_INPUT_LENGTH,
        }
    }
}

impl InputSanitizer {
    /// Creates a sanitizer with the default 2..=200 character window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sanitizer with custom length bounds.
    pub fn with_limits(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Returns true if the answer is worth processing.
    pub fn is_valid(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }

    /// Checks the trimmed answer against the length and spam rules.
    pub fn check(&self, input: &str) -> Result<(), InputRejection> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InputRejection::Empty);
        }

        let length = trimmed.chars().count();
        if length < self.min_length {
            return Err(InputRejection::TooShort {
                min: self.min_length,
                actual: length,
            });
        }
        if length > self.max_length {
            return Err(InputRejection::TooLong {
                max: self.max_length,
                actual: length,
            });
        }

        let distinct: HashSet<char> = trimmed.chars().collect();
        if distinct.len() == 1 && length > 2 {
            return Err(InputRejection::RepeatedCharacter);
        }

        Ok(())
    }

    /// Strips angle brackets and surrounding whitespace.
    ///
    /// Idempotent: the output never has brackets or outer whitespace left.
    pub fn sanitize(&self, input: &str) -> String {
        input
            .chars()
            .filter(|c| *c != '<' && *c != '>')
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Sanitizes then validates, handing back the cleaned text.
    pub fn clean(&self, input: &str) -> Result<String, InputRejection> {
        let cleaned = self.sanitize(input);
        self.check(&cleaned)?;
        Ok(cleaned)
    }
}
