//! Input validation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::conversation::{InputSanitizer, MAX_INPUT_LENGTH, MIN_INPUT_LENGTH};

/// Answer length limits, counted in characters
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl InputConfig {
    /// Validate input configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(ValidationError::InvalidInputLengths {
                min: self.min_length,
                max: self.max_length,
            });
        }
        Ok(())
    }

    pub fn to_sanitizer(&self) -> InputSanitizer {
        InputSanitizer::with_limits(self.min_length, self.max_length)
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

fn default_min_length() -> usize {
    MIN_INPUT_LENGTH
}

fn default_max_length() -> usize {
    MAX_INPUT_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_config_defaults() {
        let config = InputConfig::default();
        assert_eq!(config.min_length, 2);
        assert_eq!(config.max_length, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_limits_are_rejected() {
        let config = InputConfig {
            min_length: 10,
            max_length: 5,
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidInputLengths { min: 10, max: 5 })
        ));
    }

    #[test]
    fn test_zero_minimum_is_rejected() {
        let config = InputConfig {
            min_length: 0,
            max_length: 5,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sanitizer_uses_limits() {
        let sanitizer = InputConfig {
            min_length: 3,
            max_length: 4,
        }
        .to_sanitizer();
        assert!(!sanitizer.is_valid("ab"));
        assert!(sanitizer.is_valid("abc"));
        assert!(!sanitizer.is_valid("abcde"));
    }
}
