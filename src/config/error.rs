//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("dialogue.max_reprompts must be 0 or 1, got {0}")]
    InvalidMaxReprompts(u8),

    #[error("dialogue.persona_name cannot be empty")]
    EmptyPersonaName,

    #[error("input lengths must satisfy 1 <= min_length <= max_length, got {min}..{max}")]
    InvalidInputLengths { min: usize, max: usize },

    #[error("extraction.reference_year {0} is outside the supported range")]
    InvalidReferenceYear(i32),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
