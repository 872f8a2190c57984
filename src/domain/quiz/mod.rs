//! Quiz rounds for the phishing-detection and data-sensitivity games.
//!
//! Callers supply the round content; this module only runs the rounds.

mod items;
mod session;

pub use items::{PhishingScenario, QuizItem, SensitivityItem};
pub use session::{AnswerFeedback, QuizError, QuizSession, RoundPhase};
