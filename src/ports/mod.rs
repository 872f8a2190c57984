//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ConversationObserver` - Receives conversation events after each turn

mod conversation_observer;

pub use conversation_observer::ConversationObserver;
