//! In-memory observer that records every event it receives.
//!
//! Deterministic and synchronous; intended for tests.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::domain::conversation::ConversationEvent;
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ConversationObserver;

/// Observer that keeps received events for later inspection.
///
/// # Example
///
/// ```ignore
/// let recorder = Arc::new(RecordingObserver::new());
/// let session = ChatSession::new(conversation).with_observer(recorder.clone());
///
/// session.submit_answer("Sam").await?;
/// assert!(recorder.has_event("conversation.advanced"));
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    received: RwLock<Vec<ConversationEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns all received events in arrival order.
    pub fn events(&self) -> Vec<ConversationEvent> {
        self.received
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns events with the given dotted type name.
    pub fn events_of_type(&self, event_type: &str) -> Vec<ConversationEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Returns events for one conversation.
    pub fn events_for(&self, conversation_id: ConversationId) -> Vec<ConversationEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.conversation_id() == conversation_id)
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.received
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.received
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type() == event_type)
    }

    /// Clears all received events (for test isolation).
    pub fn clear(&self) {
        self.received
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[async_trait]
impl ConversationObserver for RecordingObserver {
    fn name(&self) -> &str {
        "recording"
    }

    async fn notify(&self, event: &ConversationEvent) -> Result<(), DomainError> {
        self.received
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;

    fn started(id: ConversationId) -> ConversationEvent {
        ConversationEvent::Started {
            conversation_id: id,
            started_at: Timestamp::now(),
        }
    }

    fn finished(id: ConversationId) -> ConversationEvent {
        ConversationEvent::Finished {
            conversation_id: id,
            finished_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn records_events_in_order() {
        let recorder = RecordingObserver::new();
        let id = ConversationId::new();

        recorder.notify(&started(id)).await.unwrap();
        recorder.notify(&finished(id)).await.unwrap();

        let events = recorder.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "conversation.started");
        assert_eq!(events[1].event_type(), "conversation.finished");
    }

    #[tokio::test]
    async fn filters_by_type_and_conversation() {
        let recorder = RecordingObserver::new();
        let first = ConversationId::new();
        let second = ConversationId::new();

        recorder
            .notify_all(&[started(first), started(second), finished(first)])
            .await
            .unwrap();

        assert_eq!(recorder.events_of_type("conversation.started").len(), 2);
        assert_eq!(recorder.events_for(first).len(), 2);
        assert!(recorder.has_event("conversation.finished"));
        assert!(!recorder.has_event("conversation.reprompted"));
    }

    #[tokio::test]
    async fn clear_empties_the_log() {
        let recorder = RecordingObserver::new();
        recorder.notify(&started(ConversationId::new())).await.unwrap();

        recorder.clear();

        assert_eq!(recorder.event_count(), 0);
    }
}
