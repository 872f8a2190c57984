//! Dialogue configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::conversation::{DialogueSettings, MAX_REPROMPT_LIMIT};

/// Dialogue engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// How many times an irrelevant answer is re-asked (0 or 1)
    #[serde(default = "default_max_reprompts")]
    pub max_reprompts: u8,

    /// Name the bot introduces itself with
    #[serde(default = "default_persona_name")]
    pub persona_name: String,
}

impl DialogueConfig {
    /// Validate dialogue configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_reprompts > MAX_REPROMPT_LIMIT {
            return Err(ValidationError::InvalidMaxReprompts(self.max_reprompts));
        }
        if self.persona_name.trim().is_empty() {
            return Err(ValidationError::EmptyPersonaName);
        }
        Ok(())
    }

    /// Build domain settings from validated values
    pub fn to_settings(&self) -> Result<DialogueSettings, ValidationError> {
        self.validate()?;
        DialogueSettings::new(self.max_reprompts, self.persona_name.trim())
            .map_err(|_| ValidationError::InvalidMaxReprompts(self.max_reprompts))
    }
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            max_reprompts: default_max_reprompts(),
            persona_name: default_persona_name(),
        }
    }
}

fn default_max_reprompts() -> u8 {
    MAX_REPROMPT_LIMIT
}

fn default_persona_name() -> String {
    "Nova".to_string()
}
