//! ChatSession - Serializes turns on one conversation and notifies observers.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::{AppConfig, ConfigError};
use crate::domain::conversation::{
    Conversation, ConversationEvent, DialoguePhase, ExtractedFields, TurnOutcome,
};
use crate::domain::foundation::{ConversationId, DomainError};
use crate::ports::ConversationObserver;

/// Async front for a single conversation.
///
/// Turns are applied one at a time, so concurrent callers see a consistent
/// order. Events recorded during a turn are delivered to every observer
/// before the turn returns; an observer failure is logged and does not undo
/// the turn.
///
/// The conversation lock is released before observers run, so an observer
/// may read the session (e.g. `extracted_data`) from inside `notify`. A
/// separate turn lock keeps deliveries in turn order.
pub struct ChatSession {
    turn: Mutex<()>,
    conversation: Mutex<Conversation>,
    observers: Vec<Arc<dyn ConversationObserver>>,
}

impl ChatSession {
    pub fn new(conversation: Conversation) -> Self {
        Self {
            turn: Mutex::new(()),
            conversation: Mutex::new(conversation),
            observers: Vec::new(),
        }
    }

    /// Builds a session from validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.build_conversation()?))
    }

    /// Registers an observer for all subsequent turns.
    pub fn with_observer(mut self, observer: Arc<dyn ConversationObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Starts (or restarts) the conversation and returns the first prompt.
    pub async fn start_conversation(&self) -> String {
        let _turn = self.turn.lock().await;
        let (greeting, events) = {
            let mut conversation = self.conversation.lock().await;
            let greeting = conversation.start();
            (greeting, conversation.take_events())
        };
        self.publish(&events).await;
        greeting
    }

    /// Applies one user answer.
    pub async fn submit_answer(&self, raw: &str) -> Result<TurnOutcome, DomainError> {
        let _turn = self.turn.lock().await;
        let (outcome, events) = {
            let mut conversation = self.conversation.lock().await;
            let outcome = conversation.submit_answer(raw)?;
            (outcome, conversation.take_events())
        };
        self.publish(&events).await;
        Ok(outcome)
    }

    /// Snapshot of everything extracted so far.
    pub async fn extracted_data(&self) -> ExtractedFields {
        self.conversation.lock().await.extracted_data()
    }

    pub async fn reveal(&self) -> Option<String> {
        self.conversation.lock().await.reveal().map(str::to_string)
    }

    pub async fn phase(&self) -> DialoguePhase {
        self.conversation.lock().await.phase()
    }

    pub async fn conversation_id(&self) -> ConversationId {
        *self.conversation.lock().await.id()
    }

    pub async fn is_finished(&self) -> bool {
        self.conversation.lock().await.is_finished()
    }

    async fn publish(&self, events: &[ConversationEvent]) {
        if events.is_empty() || self.observers.is_empty() {
            return;
        }
        debug!(
            event_count = events.len(),
            observer_count = self.observers.len(),
            "Publishing conversation events"
        );

        let deliveries = self.observers.iter().map(|observer| async move {
            (observer.name(), observer.notify_all(events).await)
        });
        for (name, result) in join_all(deliveries).await {
            if let Err(err) = result {
                warn!(observer = name, error = %err, "Conversation observer failed");
            }
        }
    }
}
