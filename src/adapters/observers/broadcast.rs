//! Observer that fans events out over a tokio broadcast channel.
//!
//! Lets any number of listeners (a UI task, a log shipper) follow a
//! conversation. Slow receivers lag and miss events rather than blocking turns.

use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::conversation::ConversationEvent;
use crate::domain::foundation::DomainError;
use crate::ports::ConversationObserver;

/// Default buffer size per channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Publishes events to all current subscribers.
#[derive(Debug, Clone)]
pub struct BroadcastObserver {
    sender: broadcast::Sender<ConversationEvent>,
}

impl BroadcastObserver {
    /// Creates an observer with the given channel capacity.
    pub fn new(channel_capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(channel_capacity.max(1));
        Self { sender }
    }

    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Returns a receiver that sees every event sent after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastObserver {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[async_trait]
impl ConversationObserver for BroadcastObserver {
    fn name(&self) -> &str {
        "broadcast"
    }

    async fn notify(&self, event: &ConversationEvent) -> Result<(), DomainError> {
        // No subscribers is fine.
        let _ = self.sender.send(event.clone());
        Ok(())
    }
}
