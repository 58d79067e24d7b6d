//! The send flow: assemble, submit, dispatch, persist.

use tracing::debug;

use crate::assemble::assemble;
use crate::dispatch::{dispatch, CompletionSink};
use crate::{CompletionClient, CompletionResponse, Turn, ROLE_ASSISTANT};

use super::manager::Session;
use super::types::{BusyGuard, SessionError};

impl Session {
    /// Run one full exchange for a finished utterance.
    ///
    /// The pending utterance, the optional screenshot, and the token
    /// budget are threaded in explicitly rather than read from ambient
    /// state. Nothing is persisted unless the exchange succeeds: on any
    /// completion error the store is exactly as it was and the user can
    /// simply send again.
    pub async fn send(
        &self,
        client: &dyn CompletionClient,
        utterance: impl Into<String> + Send,
        image: Option<String>,
        max_tokens: u32,
        sink: &CompletionSink,
    ) -> Result<CompletionResponse, SessionError> {
        let _guard = BusyGuard::acquire(&self.busy)?;

        let pending = utterance.into();
        let request = assemble(&self.transcript.snapshot(), &pending, image, max_tokens);
        debug!(
            session = %self.id,
            messages = request.input_messages.len(),
            "sending completion request"
        );

        let response = client.submit(&request).await?;

        // Persist only after a successful exchange.
        self.transcript.append(Turn::user(pending));
        dispatch(&response, sink);
        self.transcript
            .append(Turn::new(ROLE_ASSISTANT, self.policy.content(&response)));

        Ok(response)
    }
}
