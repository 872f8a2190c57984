//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PRIVACY_LAB_` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a working setup.
//!
//! # Example
//!
//! ```no_run
//! use privacy_lab::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Bot persona: {}", config.dialogue.persona_name);
//! ```

mod dialogue;
mod error;
mod extraction;
mod input;
mod logging;

pub use dialogue::DialogueConfig;
pub use error::{ConfigError, ValidationError};
pub use extraction::ExtractionConfig;
pub use input::InputConfig;
pub use logging::LoggingConfig;

use serde::Deserialize;
use std::path::Path;

use crate::domain::conversation::Conversation;

const ENV_PREFIX: &str = "PRIVACY_LAB";

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dialogue engine configuration (re-prompt limit, persona)
    #[serde(default)]
    pub dialogue: DialogueConfig,

    /// Answer length limits
    #[serde(default)]
    pub input: InputConfig,

    /// Entity extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PRIVACY_LAB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PRIVACY_LAB__DIALOGUE__MAX_REPROMPTS=0` -> `dialogue.max_reprompts = 0`
    /// - `PRIVACY_LAB__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables layered on top
    ///
    /// The format (TOML, YAML, JSON, ...) is inferred from the file extension.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dialogue.validate()?;
        self.input.validate()?;
        self.extraction.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Build a conversation wired with the configured sanitizer, extractor and settings
    pub fn build_conversation(&self) -> Result<Conversation, ConfigError> {
        self.validate()?;
        Ok(Conversation::new(
            self.extraction.to_extractor(),
            self.input.to_sanitizer(),
            self.dialogue.to_settings()?,
        ))
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}
