//! `CompletionClient` trait implementation for `HttpCompletionClient`.

use async_trait::async_trait;
use tracing::debug;

use crate::{CompletionClient, CompletionError, CompletionRequest, CompletionResponse};

use super::client::HttpCompletionClient;

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn submit(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        debug!(
            endpoint = %self.config.endpoint,
            messages = request.input_messages.len(),
            image = request.base64_image.is_some(),
            max_tokens = request.max_tokens,
            "completion request"
        );

        let response = self
            .http
            .post(&self.config.endpoint)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            // Body ignored on rejection.
            return Err(CompletionError::ServiceRejected(status.as_u16()));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout
            } else {
                CompletionError::MalformedResponse(e.to_string())
            }
        })?;

        let decomposed = self.parse_response(json)?;
        debug!(
            script_chars = decomposed.speech_part_script.len(),
            audio_chars = decomposed.speech_part_base64.len(),
            text_chars = decomposed.text_part.len(),
            "completion response decomposed"
        );
        Ok(decomposed)
    }
}

fn transport_error(error: reqwest::Error) -> CompletionError {
    if error.is_timeout() {
        CompletionError::Timeout
    } else {
        CompletionError::TransportFailure(error.to_string())
    }
}
