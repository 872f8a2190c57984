//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors, state machine trait)
//! - `conversation` - Scripted chat, input sanitizing and entity extraction
//! - `password` - Password entropy, crack-time estimate and digest
//! - `quiz` - Phishing and data-sensitivity quiz rounds

pub mod conversation;
pub mod foundation;
pub mod password;
pub mod quiz;
