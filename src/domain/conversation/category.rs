//! Question categories and extraction labels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::fields::ExtractedFields;

/// The kind of information a dialogue question is fishing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Name,
    Age,
    Job,
    Contact,
}

impl Category {
    /// Labels that count as a satisfying answer for this category.
    pub fn relevant_labels(&self) -> &'static [Label] {
        match self {
            Self::Name => &[Label::Person],
            Self::Age => &[Label::Age],
            Self::Job => &[Label::Job],
            Self::Contact => &[Label::Email, Label::Phone, Label::ContactInfo],
        }
    }

    /// Returns true if the extraction produced something this category cares about.
    pub fn is_satisfied_by(&self, fields: &ExtractedFields) -> bool {
        fields.contains_any(self.relevant_labels())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Age => "age",
            Self::Job => "job",
            Self::Contact => "contact",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of one extracted value.
///
/// Declaration order is the display order of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    Person,
    Age,
    Job,
    Email,
    Phone,
    ContactInfo,
    Location,
    Organization,
}

impl Label {
    pub const ALL: [Label; 8] = [
        Label::Person,
        Label::Age,
        Label::Job,
        Label::Email,
        Label::Phone,
        Label::ContactInfo,
        Label::Location,
        Label::Organization,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Age => "AGE",
            Self::Job => "JOB",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::ContactInfo => "CONTACT_INFO",
            Self::Location => "LOCATION",
            Self::Organization => "ORGANIZATION",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
