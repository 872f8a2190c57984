//! Observer that writes conversation events to the tracing log.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::conversation::ConversationEvent;
use crate::domain::foundation::DomainError;
use crate::ports::ConversationObserver;

/// Logs each event with structured fields.
///
/// Only identifiers, indices, categories and labels are logged; answer
/// text never reaches this observer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConversationObserver for TracingObserver {
    fn name(&self) -> &str {
        "tracing"
    }

    async fn notify(&self, event: &ConversationEvent) -> Result<(), DomainError> {
        let conversation_id = event.conversation_id().to_string();
        let event_type = event.event_type();

        match event {
            ConversationEvent::Started { .. } | ConversationEvent::Finished { .. } => {
                info!(%conversation_id, event_type, "Conversation event");
            }
            ConversationEvent::AnswerRejected {
                question_index,
                reason,
                ..
            } => {
                debug!(%conversation_id, event_type, question_index, reason = %reason, "Answer rejected");
            }
            ConversationEvent::Reprompted {
                question_index,
                category,
                ..
            } => {
                debug!(%conversation_id, event_type, question_index, category = %category, "Question re-asked");
            }
            ConversationEvent::FieldsMerged { labels, .. } => {
                let labels: Vec<&str> = labels.iter().map(|l| l.as_str()).collect();
                debug!(%conversation_id, event_type, ?labels, "Extracted fields merged");
            }
            ConversationEvent::Advanced { from, to, .. } => {
                debug!(%conversation_id, event_type, from, to, "Conversation advanced");
            }
        }
        Ok(())
    }
}
