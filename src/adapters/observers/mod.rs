//! Conversation observer adapters.

mod broadcast;
mod in_memory;
mod tracing_observer;

pub use self::broadcast::{BroadcastObserver, DEFAULT_CHANNEL_CAPACITY};
pub use in_memory::RecordingObserver;
pub use tracing_observer::TracingObserver;
