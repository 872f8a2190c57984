//! Labeled values pulled out of user answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::Label;

/// Mapping from extraction label to the value found for it.
///
/// Keys are unique and merging is last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedFields(BTreeMap<Label, String>);

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, returning the one it replaced.
    pub fn insert(&mut self, label: Label, value: impl Into<String>) -> Option<String> {
        self.0.insert(label, value.into())
    }

    pub fn get(&self, label: Label) -> Option<&str> {
        self.0.get(&label).map(String::as_str)
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0.contains_key(&label)
    }

    pub fn contains_any(&self, labels: &[Label]) -> bool {
        labels.iter().any(|label| self.contains(*label))
    }

    /// Merges `other` into self, overwriting on collision.
    ///
    /// Returns the labels whose value was added or changed.
    pub fn merge(&mut self, other: &ExtractedFields) -> Vec<Label> {
        let mut changed = Vec::new();
        for (label, value) in &other.0 {
            if self.0.get(label) != Some(value) {
                self.0.insert(*label, value.clone());
                changed.push(*label);
            }
        }
        changed
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Label, &str)> {
        self.0.iter().map(|(label, value)| (*label, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Renders the snapshot as a pretty-printed JSON object keyed by label.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.0)
    }
}

impl FromIterator<(Label, String)> for ExtractedFields {
    fn from_iter<I: IntoIterator<Item = (Label, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
