//! Conversation domain events.

use serde::{Deserialize, Serialize};

use super::category::{Category, Label};
use crate::domain::foundation::{ConversationId, Timestamp};

/// Events recorded by a conversation as it changes state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConversationEvent {
    /// A new conversation was started (or an old one restarted).
    Started {
        conversation_id: ConversationId,
        started_at: Timestamp,
    },

    /// An answer failed validation and was ignored.
    AnswerRejected {
        conversation_id: ConversationId,
        question_index: usize,
        reason: String,
    },

    /// The current question was asked again.
    Reprompted {
        conversation_id: ConversationId,
        question_index: usize,
        category: Category,
    },

    /// New or changed values were merged into the extracted data.
    FieldsMerged {
        conversation_id: ConversationId,
        labels: Vec<Label>,
    },

    /// The conversation moved on to the next question.
    Advanced {
        conversation_id: ConversationId,
        from: usize,
        to: usize,
    },

    /// The last question was answered and the reveal produced.
    Finished {
        conversation_id: ConversationId,
        finished_at: Timestamp,
    },
}

impl ConversationEvent {
    /// Dotted event name used for log routing.
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Started { .. } => "conversation.started",
            Self::AnswerRejected { .. } => "conversation.answer_rejected",
            Self::Reprompted { .. } => "conversation.reprompted",
            Self::FieldsMerged { .. } => "conversation.fields_merged",
            Self::Advanced { .. } => "conversation.advanced",
            Self::Finished { .. } => "conversation.finished",
        }
    }

    pub fn conversation_id(&self) -> ConversationId {
        match self {
            Self::Started { conversation_id, .. }
            | Self::AnswerRejected { conversation_id, .. }
            | Self::Reprompted { conversation_id, .. }
            | Self::FieldsMerged { conversation_id, .. }
            | Self::Advanced { conversation_id, .. }
            | Self::Finished { conversation_id, .. } => *conversation_id,
        }
    }
}
