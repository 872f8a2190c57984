//! Round engine shared by the quiz games.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, StateMachine};

use super::items::QuizItem;

/// Quiz misuse.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("A quiz needs at least one item")]
    Empty,

    #[error("This round has already been answered")]
    AnswerAlreadyRevealed,

    #[error("The game is over")]
    GameOver,
}

impl From<QuizError> for DomainError {
    fn from(err: QuizError) -> Self {
        let code = match &err {
            QuizError::Empty => ErrorCode::QuizEmpty,
            QuizError::AnswerAlreadyRevealed => ErrorCode::InvalidStateTransition,
            QuizError::GameOver => ErrorCode::QuizOver,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    #[default]
    Asking,
    Revealed,
    GameOver,
}

impl StateMachine for RoundPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RoundPhase::*;
        match self {
            Asking => vec![Asking, Revealed, GameOver],
            Revealed => vec![Asking, GameOver],
            GameOver => vec![],
        }
    }
}

/// Result of answering one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub explanation: String,
    pub score: usize,
}

/// A sequence of yes/no rounds with a running score.
#[derive(Debug, Clone)]
pub struct QuizSession<T: QuizItem> {
    items: Vec<T>,
    index: usize,
    score: usize,
    phase: RoundPhase,
    last_answer_correct: Option<bool>,
}

impl<T: QuizItem> QuizSession<T> {
    pub fn new(items: Vec<T>) -> Result<Self, QuizError> {
        if items.is_empty() {
            return Err(QuizError::Empty);
        }
        Ok(Self {
            items,
            index: 0,
            score: 0,
            phase: RoundPhase::Asking,
            last_answer_correct: None,
        })
    }

    /// Draws up to `count` distinct items from `pool` in random order.
    pub fn from_pool<R: Rng + ?Sized>(
        pool: &[T],
        count: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let items = pool.choose_multiple(rng, count).cloned().collect();
        Self::new(items)
    }

    /// Like [`from_pool`](Self::from_pool) but takes at most `per_side`
    /// positive and `per_side` negative items, so the answer is never
    /// always "yes".
    pub fn balanced_from_pool<R: Rng + ?Sized>(
        pool: &[T],
        per_side: usize,
        rng: &mut R,
    ) -> Result<Self, QuizError> {
        let (positive, negative): (Vec<&T>, Vec<&T>) =
            pool.iter().partition(|item| item.is_positive());

        let mut items: Vec<T> = positive
            .choose_multiple(rng, per_side)
            .chain(negative.choose_multiple(rng, per_side))
            .map(|item| (*item).clone())
            .collect();
        items.shuffle(rng);
        Self::new(items)
    }

    /// Replaces the rounds and resets the score.
    pub fn restart(&mut self, items: Vec<T>) -> Result<(), QuizError> {
        *self = Self::new(items)?;
        Ok(())
    }

    pub fn current(&self) -> Option<&T> {
        if self.is_game_over() {
            return None;
        }
        self.items.get(self.index)
    }

    pub fn round_number(&self) -> usize {
        self.index + 1
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_rounds(&self) -> usize {
        self.items.len()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn last_answer_correct(&self) -> Option<bool> {
        self.last_answer_correct
    }

    /// Scores the current round. Each round accepts exactly one answer.
    pub fn answer(&mut self, says_positive: bool) -> Result<AnswerFeedback, QuizError> {
        match self.phase {
            RoundPhase::GameOver => return Err(QuizError::GameOver),
            RoundPhase::Revealed => return Err(QuizError::AnswerAlreadyRevealed),
            RoundPhase::Asking => {}
        }
        let item = self.items.get(self.index).ok_or(QuizError::GameOver)?;

        let correct = says_positive == item.is_positive();
        let explanation = item.explanation().to_string();
        if correct {
            self.score += 1;
        }
        self.last_answer_correct = Some(correct);
        self.phase = self.advance(RoundPhase::Revealed)?;

        tracing::debug!(round = self.index, correct, score = self.score, "Quiz round answered");

        Ok(AnswerFeedback {
            correct,
            explanation,
            score: self.score,
        })
    }

    /// Moves to the next round, or ends the game after the last one.
    /// Skipping an unanswered round is allowed and scores nothing.
    pub fn next_round(&mut self) -> Result<RoundPhase, QuizError> {
        if self.is_game_over() {
            return Err(QuizError::GameOver);
        }
        let target = if self.index + 1 >= self.items.len() {
            RoundPhase::GameOver
        } else {
            self.index += 1;
            RoundPhase::Asking
        };
        self.phase = self.advance(target)?;
        self.last_answer_correct = None;
        Ok(self.phase)
    }

    fn advance(&self, target: RoundPhase) -> Result<RoundPhase, QuizError> {
        self.phase
            .transition_to(target)
            .map_err(|_| QuizError::GameOver)
    }

    pub fn score_message(&self) -> &'static str {
        T::score_message(self.score, self.total_rounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::quiz::{PhishingScenario, SensitivityItem};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scenario(is_phishing: bool) -> PhishingScenario {
        PhishingScenario {
            sender: "support@paypa1.com".to_string(),
            subject: "Urgent".to_string(),
            body: "Verify now".to_string(),
            is_phishing,
            explanation: if is_phishing { "fake" } else { "real" }.to_string(),
            red_flags: vec![],
        }
    }

    fn item(label: &str, is_sensitive: bool) -> SensitivityItem {
        SensitivityItem {
            data_label: label.to_string(),
            context: "posted publicly".to_string(),
            is_sensitive,
            explanation: String::new(),
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn empty_items_are_rejected() {
            let result = QuizSession::<PhishingScenario>::new(vec![]);
            assert_eq!(result.unwrap_err(), QuizError::Empty);
        }

        #[test]
        fn from_pool_takes_distinct_items_up_to_count() {
            let pool: Vec<_> = (0..10).map(|i| item(&format!("item {i}"), i % 2 == 0)).collect();
            let mut rng = StdRng::seed_from_u64(7);

            let session = QuizSession::from_pool(&pool, 4, &mut rng).unwrap();
            assert_eq!(session.total_rounds(), 4);

            let mut labels: Vec<_> = session.items.iter().map(|i| i.data_label.clone()).collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), 4);
        }

        #[test]
        fn from_pool_with_small_pool_uses_everything() {
            let pool = vec![scenario(true), scenario(false)];
            let mut rng = StdRng::seed_from_u64(1);
            let session = QuizSession::from_pool(&pool, 4, &mut rng).unwrap();
            assert_eq!(session.total_rounds(), 2);
        }

        #[test]
        fn from_empty_pool_fails() {
            let mut rng = StdRng::seed_from_u64(1);
            let result = QuizSession::<PhishingScenario>::from_pool(&[], 4, &mut rng);
            assert_eq!(result.unwrap_err(), QuizError::Empty);
        }

        #[test]
        fn balanced_selection_mixes_both_sides() {
            let mut pool: Vec<_> = (0..8).map(|i| item(&format!("secret {i}"), true)).collect();
            pool.extend((0..8).map(|i| item(&format!("harmless {i}"), false)));
            let mut rng = StdRng::seed_from_u64(42);

            let session = QuizSession::balanced_from_pool(&pool, 3, &mut rng).unwrap();
            let positives = session.items.iter().filter(|i| i.is_sensitive).count();

            assert_eq!(session.total_rounds(), 6);
            assert_eq!(positives, 3);
        }
    }

    mod rounds {
        use super::*;

        #[test]
        fn correct_answer_scores_and_reveals() {
            let mut session = QuizSession::new(vec![scenario(true), scenario(false)]).unwrap();

            let feedback = session.answer(true).unwrap();

            assert!(feedback.correct);
            assert_eq!(feedback.explanation, "fake");
            assert_eq!(session.score(), 1);
            assert_eq!(session.phase(), RoundPhase::Revealed);
            assert_eq!(session.last_answer_correct(), Some(true));
        }

        #[test]
        fn wrong_answer_does_not_score() {
            let mut session = QuizSession::new(vec![scenario(false)]).unwrap();
            let feedback = session.answer(true).unwrap();
            assert!(!feedback.correct);
            assert_eq!(session.score(), 0);
        }

        #[test]
        fn second_answer_in_same_round_is_refused() {
            let mut session = QuizSession::new(vec![scenario(true)]).unwrap();
            session.answer(true).unwrap();

            assert_eq!(session.answer(true), Err(QuizError::AnswerAlreadyRevealed));
            assert_eq!(session.score(), 1);
        }

        #[test]
        fn next_round_advances_then_ends() {
            let mut session = QuizSession::new(vec![scenario(true), scenario(false)]).unwrap();
            session.answer(true).unwrap();

            assert_eq!(session.next_round().unwrap(), RoundPhase::Asking);
            assert_eq!(session.round_number(), 2);
            assert_eq!(session.current().map(|s| s.is_phishing), Some(false));

            session.answer(false).unwrap();
            assert_eq!(session.next_round().unwrap(), RoundPhase::GameOver);
            assert!(session.is_game_over());
            assert!(session.current().is_none());
            assert_eq!(session.score(), 2);
        }

        #[test]
        fn game_over_refuses_further_play() {
            let mut session = QuizSession::new(vec![scenario(true)]).unwrap();
            session.next_round().unwrap();

            assert_eq!(session.answer(true), Err(QuizError::GameOver));
            assert_eq!(session.next_round(), Err(QuizError::GameOver));
        }

        #[test]
        fn restart_resets_score_and_rounds() {
            let mut session = QuizSession::new(vec![scenario(true)]).unwrap();
            session.answer(true).unwrap();
            session.next_round().unwrap();

            session.restart(vec![scenario(false), scenario(true)]).unwrap();

            assert_eq!(session.score(), 0);
            assert_eq!(session.total_rounds(), 2);
            assert_eq!(session.phase(), RoundPhase::Asking);
        }

        #[test]
        fn score_message_uses_item_table() {
            let mut session = QuizSession::new(vec![scenario(true)]).unwrap();
            session.answer(true).unwrap();
            assert_eq!(session.score_message(), "Careful, phishing can be tricky.");
        }
    }

    mod phases {
        use super::*;

        #[test]
        fn game_over_is_terminal() {
            assert!(RoundPhase::GameOver.is_terminal());
            assert!(!RoundPhase::Revealed.is_terminal());
        }

        #[test]
        fn revealed_cannot_be_revealed_again() {
            assert!(!RoundPhase::Revealed.can_transition_to(&RoundPhase::Revealed));
        }
    }

    #[test]
    fn quiz_errors_map_to_domain_codes() {
        let err: DomainError = QuizError::GameOver.into();
        assert_eq!(err.code, ErrorCode::QuizOver);
        let err: DomainError = QuizError::Empty.into();
        assert_eq!(err.code, ErrorCode::QuizEmpty);
    }
}
