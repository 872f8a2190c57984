//! Conversation domain module.
//!
//! Runs the simulated social-engineering chat: a fixed script of questions,
//! layered entity extraction over each answer, and the final reveal of
//! everything the user gave away.

mod aggregate;
mod category;
mod events;
mod extractor;
mod fields;
mod phase;
mod question;
mod sanitizer;
mod state;
mod summary;
mod tables;
mod tagger;

pub use aggregate::{
    Conversation, DialogueSettings, TurnOutcome, CLARIFY_MESSAGE, MAX_REPROMPT_LIMIT,
};
pub use category::{Category, Label};
pub use events::ConversationEvent;
pub use extractor::{
    find_email, find_job, find_number_word, find_phone, EntityExtractor, AGE_RANGE,
    EARLIEST_BIRTH_YEAR,
};
pub use fields::ExtractedFields;
pub use phase::DialoguePhase;
pub use question::{default_questions, Question, DEFAULT_ADDRESSEE, QUESTION_COUNT};
pub use sanitizer::{InputRejection, InputSanitizer, MAX_INPUT_LENGTH, MIN_INPUT_LENGTH};
pub use state::ConversationState;
pub use summary::build_reveal;
pub use tagger::{EntityRecognizer, HeuristicTagger, TaggedEntity};
