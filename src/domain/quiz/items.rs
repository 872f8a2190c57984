//! Round content for the two mini-games.

use serde::{Deserialize, Serialize};

/// Something the player classifies with a yes/no answer.
pub trait QuizItem: Clone {
    /// Whether "yes" is the correct answer (phishing, or sensitive).
    fn is_positive(&self) -> bool;

    fn explanation(&self) -> &str;

    /// End-of-game message for `score` correct answers out of `total`.
    fn score_message(score: usize, total: usize) -> &'static str;
}

/// An email the player judges as phishing or legitimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhishingScenario {
    pub sender: String,
    pub subject: String,
    pub body: String,
    pub is_phishing: bool,
    pub explanation: String,
    #[serde(default)]
    pub red_flags: Vec<String>,
}

impl QuizItem for PhishingScenario {
    fn is_positive(&self) -> bool {
        self.is_phishing
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }

    fn score_message(score: usize, _total: usize) -> &'static str {
        match score {
            4 => "Perfect! You're a phishing expert!",
            3 => "Great job! You spotted most of them.",
            2 => "Not bad, but stay vigilant!",
            1 => "Careful, phishing can be tricky.",
            _ => "Time to brush up on your phishing awareness!",
        }
    }
}

/// A piece of personal data in a sharing context: lock it or let it go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitivityItem {
    pub data_label: String,
    pub context: String,
    pub is_sensitive: bool,
    pub explanation: String,
}

impl QuizItem for SensitivityItem {
    fn is_positive(&self) -> bool {
        self.is_sensitive
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }

    fn score_message(score: usize, total: usize) -> &'static str {
        let ratio = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64
        };
        if ratio >= 1.0 {
            "Flawless! You know exactly what to protect."
        } else if ratio >= 0.8 {
            "Great instincts! You're privacy-aware."
        } else if ratio >= 0.5 {
            "Not bad, but some data slipped through."
        } else {
            "Time to rethink what you share online!"
        }
    }
}
