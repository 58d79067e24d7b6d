//! HTTP client for the remote completion service.
//!
//! One JSON POST per send: no retries, and no timeout unless one is
//! opted into via [`CompletionConfig`]. A hung exchange blocks the caller
//! until the transport gives up; that is the documented contract.

mod api;
mod client;
mod config;

pub use client::HttpCompletionClient;
pub use config::{CompletionConfig, DEFAULT_MAX_TOKENS};
