//! ConversationObserver port - Interface for conversation state-change notifications.
//!
//! The conversation aggregate only records events. The application layer
//! drains them after each turn and hands them to every registered observer,
//! so a UI or a log sink can follow along without the domain
//! knowing about any of them.

use async_trait::async_trait;

use crate::domain::conversation::ConversationEvent;
use crate::domain::foundation::DomainError;

/// Port for receiving conversation events.
///
/// Implementations must not block the caller for long: turns are serialized
/// and every observer is awaited before the turn returns. Reading session
/// state from `notify` is fine; submitting another answer from it is not.
///
/// # Example
///
/// ```ignore
/// let outcome = conversation.submit_answer("Sam")?;
/// observer.notify_all(&conversation.take_events()).await?;
/// ```
#[async_trait]
pub trait ConversationObserver: Send + Sync {
    /// Short name used in logs when this observer fails.
    fn name(&self) -> &str;

    /// Receive a single event.
    async fn notify(&self, event: &ConversationEvent) -> Result<(), DomainError>;

    /// Receive a batch of events in the order they were recorded.
    ///
    /// Stops at the first failure.
    async fn notify_all(&self, events: &[ConversationEvent]) -> Result<(), DomainError> {
        for event in events {
            self.notify(event).await?;
        }
        Ok(())
    }
}
