//! Dialogue phases of a conversation turn.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// Where the conversation stands between and during turns.
///
/// ```text
/// NotStarted → AwaitingAnswer → Processing → AwaitingAnswer (next question)
///                                          → Reprompting → Processing
///                                          → Finished
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialoguePhase {
    /// Created, first prompt not yet issued.
    #[default]
    NotStarted,

    /// Waiting for the answer to the current question.
    AwaitingAnswer,

    /// An answer is being extracted; no other input is accepted.
    Processing,

    /// The last answer missed; the same question was asked again.
    Reprompting,

    /// Every question has been answered and the reveal was produced.
    Finished,
}

impl DialoguePhase {
    /// Returns true if an answer can be submitted in this phase.
    pub fn accepts_answer(&self) -> bool {
        matches!(self, Self::AwaitingAnswer | Self::Reprompting)
    }
}

impl StateMachine for DialoguePhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialoguePhase::*;
        matches!(
            (self, target),
            (NotStarted, AwaitingAnswer)
                | (AwaitingAnswer, Processing)
                | (Reprompting, Processing)
                | (Processing, AwaitingAnswer)
                | (Processing, Reprompting)
                | (Processing, Finished)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialoguePhase::*;
        match self {
            NotStarted => vec![AwaitingAnswer],
            AwaitingAnswer => vec![Processing],
            Reprompting => vec![Processing],
            Processing => vec![AwaitingAnswer, Reprompting, Finished],
            Finished => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [DialoguePhase; 5] = [
        DialoguePhase::NotStarted,
        DialoguePhase::AwaitingAnswer,
        DialoguePhase::Processing,
        DialoguePhase::Reprompting,
        DialoguePhase::Finished,
    ];

    #[test]
    fn default_phase_is_not_started() {
        assert_eq!(DialoguePhase::default(), DialoguePhase::NotStarted);
    }

    #[test]
    fn serializes_to_snake_case() {
        let json = serde_json::to_string(&DialoguePhase::AwaitingAnswer).unwrap();
        assert_eq!(json, "\"awaiting_answer\"");
    }

    #[test]
    fn only_waiting_phases_accept_answers() {
        let accepting: Vec<_> = ALL.into_iter().filter(|p| p.accepts_answer()).collect();
        assert_eq!(
            accepting,
            vec![DialoguePhase::AwaitingAnswer, DialoguePhase::Reprompting]
        );
    }

    #[test]
    fn answers_cannot_skip_processing() {
        assert!(!DialoguePhase::AwaitingAnswer.can_transition_to(&DialoguePhase::Finished));
        assert!(!DialoguePhase::Reprompting.can_transition_to(&DialoguePhase::AwaitingAnswer));
    }

    #[test]
    fn finished_is_terminal() {
        assert!(DialoguePhase::Finished.is_terminal());
        assert!(DialoguePhase::Finished
            .transition_to(DialoguePhase::AwaitingAnswer)
            .is_err());
    }

    #[test]
    fn valid_transitions_matches_can_transition_to() {
        for from in ALL {
            for to in ALL {
                assert_eq!(
                    from.valid_transitions().contains(&to),
                    from.can_transition_to(&to),
                    "{:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }
}
