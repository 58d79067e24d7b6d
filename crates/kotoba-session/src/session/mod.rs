//! Conversation session management.
//!
//! A `Session` owns the transcript store and serializes send attempts: a
//! second send while one is in flight is rejected, never queued.

mod chat;
mod manager;
mod types;

pub use manager::{AssistantTurnPolicy, Session};
pub use types::SessionError;
