//! Entropy-based password strength estimation.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::crack_time;

/// Symbols that widen the alphabet by 32.
pub const SYMBOLS: &str = ".!@#$%^&*(),?\":{}|<>";

/// Entropy at which the score saturates.
pub const MAX_ENTROPY_BITS: f64 = 128.0;

/// Assumed attacker throughput, in guesses per second.
pub const GUESSES_PER_SECOND: f64 = 10_000_000_000.0;

/// Label used when there is nothing to analyze.
pub const NOT_APPLICABLE: &str = "N/A";

/// Coarse verdict for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

/// Strength estimate for one candidate password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordAnalysis {
    /// Entropy relative to 128 bits, clamped to [0, 1].
    pub score: f64,
    pub crack_time_label: String,
    /// Lowercase SHA-256 of the UTF-8 bytes; empty for an empty password.
    pub digest_hex: String,
    pub alphabet_size: u32,
    pub entropy_bits: f64,
}

impl PasswordAnalysis {
    fn empty() -> Self {
        Self {
            score: 0.0,
            crack_time_label: NOT_APPLICABLE.to_string(),
            digest_hex: String::new(),
            alphabet_size: 0,
            entropy_bits: 0.0,
        }
    }

    pub fn tier(&self) -> StrengthTier {
        if self.digest_hex.is_empty() {
            StrengthTier::Empty
        } else if self.score < 0.4 {
            StrengthTier::Weak
        } else if self.score < 0.7 {
            StrengthTier::Medium
        } else {
            StrengthTier::Strong
        }
    }
}

/// Size of the character pool the password appears to draw from.
pub fn alphabet_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| SYMBOLS.contains(c)) {
        size += 32;
    }
    size
}

/// Analyzes a password. Pure and deterministic.
pub fn analyze(password: &str) -> PasswordAnalysis {
    if password.is_empty() {
        return PasswordAnalysis::empty();
    }

    let alphabet = alphabet_size(password);
    let effective = f64::from(alphabet.max(1));
    let length = password.chars().count() as f64;

    let entropy_bits = length * effective.log2();
    let score = (entropy_bits / MAX_ENTROPY_BITS).min(1.0);

    let seconds = effective.powf(length) / GUESSES_PER_SECOND;
    let log10_seconds = length * effective.log10() - GUESSES_PER_SECOND.log10();

    PasswordAnalysis {
        score,
        crack_time_label: crack_time::describe(seconds, log10_seconds),
        digest_hex: sha256_hex(password),
        alphabet_size: alphabet,
        entropy_bits,
    }
}

fn sha256_hex(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
