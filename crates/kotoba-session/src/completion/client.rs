//! Completion client struct and response decomposition.

use crate::{CompletionError, CompletionResponse};

use super::config::CompletionConfig;

/// Completion service client over HTTP/JSON.
pub struct HttpCompletionClient {
    pub(crate) config: CompletionConfig,
    pub(crate) http: reqwest::Client,
}

impl HttpCompletionClient {
    pub fn new(config: CompletionConfig) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            config,
            http: builder.build().expect("failed to build HTTP client"),
        }
    }

    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Decompose a 2xx body into the three payload fields.
    ///
    /// Leading/trailing whitespace is trimmed from the audio payload only;
    /// the script and text fields pass through unmodified.
    pub(crate) fn parse_response(
        &self,
        json: serde_json::Value,
    ) -> Result<CompletionResponse, CompletionError> {
        let field = |name: &str| {
            json.get(name)
                .and_then(serde_json::Value::as_str)
                .map(String::from)
                .ok_or_else(|| {
                    CompletionError::MalformedResponse(format!("missing field '{name}'"))
                })
        };

        let speech_part_script = field("speech_part_script")?;
        let speech_part_base64 = field("speech_part_base64")?.trim().to_string();
        let text_part = field("text_part")?;

        Ok(CompletionResponse {
            speech_part_script,
            speech_part_base64,
            text_part,
        })
    }
}
