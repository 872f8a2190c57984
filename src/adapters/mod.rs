//! Adapters - Implementations of port interfaces.
//!
//! - `observers` - Conversation observers (tracing log, in-memory recorder, broadcast channel)

pub mod observers;

pub use observers::{BroadcastObserver, RecordingObserver, TracingObserver};
