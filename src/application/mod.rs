//! Application layer - Services coordinating domain objects and ports.

mod chat_session;
mod password_lab;

pub use chat_session::ChatSession;
pub use password_lab::PasswordLab;
