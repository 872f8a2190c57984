//! Entity extraction configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::conversation::{EntityExtractor, EARLIEST_BIRTH_YEAR};

const LATEST_REFERENCE_YEAR: i32 = 9999;

/// Entity extraction configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExtractionConfig {
    /// Year used to turn birth years into ages; the current year when unset
    pub reference_year: Option<i32>,
}

impl ExtractionConfig {
    /// Validate extraction configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.reference_year {
            Some(year) if year <= EARLIEST_BIRTH_YEAR || year > LATEST_REFERENCE_YEAR => {
                Err(ValidationError::InvalidReferenceYear(year))
            }
            _ => Ok(()),
        }
    }

    pub fn to_extractor(&self) -> EntityExtractor {
        match self.reference_year {
            Some(year) => EntityExtractor::new(year),
            None => EntityExtractor::default(),
        }
    }
}
