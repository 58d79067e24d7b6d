//! Completion client configuration.

use std::time::Duration;

/// Default token budget for a send, matching the presentation layer's
/// initial value.
pub const DEFAULT_MAX_TOKENS: u32 = 500;

/// Completion service configuration.
///
/// Timeouts are off by default: a send with no timeout blocks its caller
/// until the transport fails. Opting in surfaces expiry as
/// [`CompletionError::Timeout`](crate::CompletionError::Timeout) and does
/// not introduce retries.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Endpoint URL of the completion service.
    pub endpoint: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    /// Token budget used by callers that do not pick one per send.
    pub default_max_tokens: u32,
}

impl CompletionConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout: None,
            request_timeout: None,
            default_max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_default_max_tokens(mut self, max_tokens: u32) -> Self {
        self.default_max_tokens = max_tokens;
        self
    }
}
