//! Conversation aggregate: the turn-based dialogue engine.
//!
//! A conversation walks the user through the question script. Each answer
//! is sanitized, run through the extractor with the current question's
//! category, and then either re-asked once or merged before moving on.
//!
//! # Aggregate Boundary
//!
//! The conversation owns its progress and extracted data exclusively.
//! Turns are synchronous and deterministic; callers serialize access.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::foundation::{
    ConversationId, DomainError, ErrorCode, StateMachine, Timestamp, ValidationError,
};

use super::category::Label;
use super::events::ConversationEvent;
use super::extractor::EntityExtractor;
use super::fields::ExtractedFields;
use super::phase::DialoguePhase;
use super::question::{default_questions, Question};
use super::sanitizer::InputSanitizer;
use super::state::ConversationState;
use super::summary::build_reveal;

/// Reply given when an answer fails validation.
pub const CLARIFY_MESSAGE: &str =
    "I'm not sure I understood that. Could you clarify your answer?";

/// Highest re-prompt limit; keeps `reprompt_count` within {0, 1}.
pub const MAX_REPROMPT_LIMIT: u8 = 1;

/// Tunable dialogue behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueSettings {
    max_reprompts: u8,
    persona_name: String,
}

impl Default for DialogueSettings {
    fn default() -> Self {
        Self {
            max_reprompts: MAX_REPROMPT_LIMIT,
            persona_name: "Nova".to_string(),
        }
    }
}

impl DialogueSettings {
    /// Creates settings, rejecting re-prompt limits above one.
    pub fn new(max_reprompts: u8, persona_name: impl Into<String>) -> Result<Self, ValidationError> {
        if max_reprompts > MAX_REPROMPT_LIMIT {
            return Err(ValidationError::out_of_range(
                "max_reprompts",
                0,
                i64::from(MAX_REPROMPT_LIMIT),
                i64::from(max_reprompts),
            ));
        }
        let persona_name = persona_name.into();
        if persona_name.trim().is_empty() {
            return Err(ValidationError::empty_field("persona_name"));
        }
        Ok(Self {
            max_reprompts,
            persona_name,
        })
    }

    pub fn max_reprompts(&self) -> u8 {
        self.max_reprompts
    }

    pub fn persona_name(&self) -> &str {
        &self.persona_name
    }
}

/// Result of submitting one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// False when the answer was refused or the conversation was already over.
    pub accepted: bool,
    /// What the bot says next: a prompt, a re-prompt, a clarification or the reveal.
    pub bot_message: String,
    pub finished: bool,
}

impl TurnOutcome {
    fn accepted(bot_message: impl Into<String>, finished: bool) -> Self {
        Self {
            accepted: true,
            bot_message: bot_message.into(),
            finished,
        }
    }

    fn refused(bot_message: impl Into<String>, finished: bool) -> Self {
        Self {
            accepted: false,
            bot_message: bot_message.into(),
            finished,
        }
    }
}

/// Conversation aggregate.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: ConversationId,
    questions: Vec<Question>,
    sanitizer: InputSanitizer,
    extractor: EntityExtractor,
    settings: DialogueSettings,
    phase: DialoguePhase,
    state: ConversationState,
    reveal: Option<String>,
    started_at: Option<Timestamp>,
    domain_events: Vec<ConversationEvent>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(
            EntityExtractor::default(),
            InputSanitizer::default(),
            DialogueSettings::default(),
        )
    }
}

impl Conversation {
    /// Creates a conversation over the default question script.
    ///
    /// The conversation starts in `NotStarted`; call [`start`](Self::start).
    pub fn new(
        extractor: EntityExtractor,
        sanitizer: InputSanitizer,
        settings: DialogueSettings,
    ) -> Self {
        Self {
            id: ConversationId::new(),
            questions: default_questions(),
            sanitizer,
            extractor,
            settings,
            phase: DialoguePhase::NotStarted,
            state: ConversationState::new(),
            reveal: None,
            started_at: None,
            domain_events: Vec::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn phase(&self) -> DialoguePhase {
        self.phase
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn settings(&self) -> &DialogueSettings {
        &self.settings
    }

    pub fn started_at(&self) -> Option<&Timestamp> {
        self.started_at.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished
    }

    /// Read-only snapshot of everything extracted so far.
    pub fn extracted_data(&self) -> ExtractedFields {
        self.state.extracted.clone()
    }

    /// The question waiting for an answer, if any.
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase.accepts_answer() {
            self.questions.get(self.state.current_question_index)
        } else {
            None
        }
    }

    /// The final summary, once the conversation is finished.
    pub fn reveal(&self) -> Option<&str> {
        self.reveal.as_deref()
    }

    /// Drains events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<ConversationEvent> {
        std::mem::take(&mut self.domain_events)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a fresh conversation and returns the first prompt.
    ///
    /// Restarting discards all progress and extracted data and assigns a new id.
    pub fn start(&mut self) -> String {
        if self.phase != DialoguePhase::NotStarted {
            self.id = ConversationId::new();
        }
        self.phase = DialoguePhase::AwaitingAnswer;
        self.state = ConversationState::new();
        self.reveal = None;

        let now = Timestamp::now();
        self.started_at = Some(now);
        self.record_event(ConversationEvent::Started {
            conversation_id: self.id,
            started_at: now,
        });
        info!(conversation_id = %self.id, "conversation started");

        self.render_prompt(0)
    }

    /// Processes one answer to the current question.
    ///
    /// Invalid input is refused without changing state. After the last
    /// question, further calls are no-ops that repeat the reveal.
    ///
    /// # Errors
    ///
    /// - `ConversationNotStarted` if [`start`](Self::start) was never called
    /// - `InvalidStateTransition` if the phase graph is violated
    pub fn submit_answer(&mut self, raw: &str) -> Result<TurnOutcome, DomainError> {
        match self.phase {
            DialoguePhase::NotStarted => {
                return Err(DomainError::new(
                    ErrorCode::ConversationNotStarted,
                    "Conversation must be started before answering",
                ))
            }
            DialoguePhase::Finished => {
                let reveal = self.reveal.clone().unwrap_or_default();
                return Ok(TurnOutcome::refused(reveal, true));
            }
            _ => {}
        }

        let index = self.state.current_question_index;
        let cleaned = match self.sanitizer.clean(raw) {
            Ok(cleaned) => cleaned,
            Err(rejection) => {
                debug!(conversation_id = %self.id, question_index = index, %rejection, "answer rejected");
                self.record_event(ConversationEvent::AnswerRejected {
                    conversation_id: self.id,
                    question_index: index,
                    reason: rejection.to_string(),
                });
                return Ok(TurnOutcome::refused(CLARIFY_MESSAGE, false));
            }
        };

        self.transition(DialoguePhase::Processing)?;

        let question = self.questions[index].clone();
        let found = self.extractor.extract(&cleaned, question.category);
        let relevant = question.category.is_satisfied_by(&found);

        if !relevant && self.state.reprompt_count < self.settings.max_reprompts {
            self.state.reprompt_count += 1;
            self.transition(DialoguePhase::Reprompting)?;
            self.record_event(ConversationEvent::Reprompted {
                conversation_id: self.id,
                question_index: index,
                category: question.category,
            });
            debug!(conversation_id = %self.id, category = %question.category, "answer missed, re-prompting");
            return Ok(TurnOutcome::accepted(question.reprompt(), false));
        }

        if !relevant {
            debug!(conversation_id = %self.id, category = %question.category, "answer missed again, moving on");
        }

        self.merge(&found);
        self.state.reprompt_count = 0;
        self.advance()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn merge(&mut self, found: &ExtractedFields) {
        let labels = self.state.extracted.merge(found);
        if !labels.is_empty() {
            debug!(conversation_id = %self.id, labels = ?labels, "fields merged");
            self.record_event(ConversationEvent::FieldsMerged {
                conversation_id: self.id,
                labels,
            });
        }
    }

    fn advance(&mut self) -> Result<TurnOutcome, DomainError> {
        let from = self.state.current_question_index;
        let to = from + 1;
        self.state.current_question_index = to;
        self.record_event(ConversationEvent::Advanced {
            conversation_id: self.id,
            from,
            to,
        });

        if to < self.questions.len() {
            self.transition(DialoguePhase::AwaitingAnswer)?;
            return Ok(TurnOutcome::accepted(self.render_prompt(to), false));
        }

        self.transition(DialoguePhase::Finished)?;
        self.state.is_finished = true;
        let reveal = build_reveal(&self.state.extracted);
        self.reveal = Some(reveal.clone());
        self.record_event(ConversationEvent::Finished {
            conversation_id: self.id,
            finished_at: Timestamp::now(),
        });
        info!(
            conversation_id = %self.id,
            fields = self.state.extracted.len(),
            "conversation finished"
        );

        Ok(TurnOutcome::accepted(reveal, true))
    }

    fn render_prompt(&self, index: usize) -> String {
        self.questions[index].render(
            self.settings.persona_name(),
            self.state.extracted.get(Label::Person),
        )
    }

    fn transition(&mut self, target: DialoguePhase) -> Result<(), DomainError> {
        self.phase = self
            .phase
            .transition_to(target)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        Ok(())
    }

    fn record_event(&mut self, event: ConversationEvent) {
        self.domain_events.push(event);
    }
}
