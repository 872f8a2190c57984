//! Progress of one conversation through the question script.

use serde::{Deserialize, Serialize};

use super::fields::ExtractedFields;

/// Mutable progress owned by a single [`Conversation`](super::Conversation).
///
/// # Invariants
///
/// - `reprompt_count` never exceeds the configured limit (0 or 1)
/// - `current_question_index` only grows, and stops at the question count
/// - `is_finished` flips to true once, when the index reaches the question count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    pub current_question_index: usize,
    pub reprompt_count: u8,
    pub extracted: ExtractedFields,
    pub is_finished: bool,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }
}
