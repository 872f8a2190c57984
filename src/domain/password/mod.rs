//! Password strength lab.
//!
//! A stateless analyst: alphabet-size entropy, a brute-force time estimate
//! at ten billion guesses per second, and the SHA-256 digest an attacker
//! would actually be cracking.

mod analyst;
mod crack_time;

pub use analyst::{
    alphabet_size, analyze, PasswordAnalysis, StrengthTier, GUESSES_PER_SECOND,
    MAX_ENTROPY_BITS, NOT_APPLICABLE, SYMBOLS,
};
pub use crack_time::describe as describe_crack_time;
