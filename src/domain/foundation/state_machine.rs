//! State machine trait for phase enums.
//!
//! Gives dialogue phases (and any other lifecycle enum) one way of
//! checking and performing transitions.

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors list their legal edges; validated transitions and the
/// terminal check come for free.
///
/// ```ignore
/// let next = DialoguePhase::AwaitingAnswer.transition_to(DialoguePhase::Processing)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
