//! HttpNarrator -- [`Narrator`] over the JSON narration endpoint.
//!
//! POSTs `{message, allocation, sessionTokens}` and expects
//! `{response}` back. Any non-2xx status, connection error or body that does
//! not carry a `response` string is reported as a [`NarrationError`]; the
//! caller's [`NarrationService`](nexus_core::narration::service::NarrationService)
//! turns it into the fallback text.

use std::time::Duration;

use nexus_core::narration::narrator::Narrator;
use nexus_types::error::NarrationError;
use nexus_types::narration::{NarrationReply, NarrationRequest};

pub struct HttpNarrator {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpNarrator {
    /// Create a narrator for `endpoint`.
    ///
    /// `timeout` is applied at the HTTP client level as well, so a hung
    /// connection is torn down even if the caller's own deadline is longer.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, NarrationError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NarrationError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Narrator for HttpNarrator {
    fn name(&self) -> &str {
        "http"
    }

    async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarrationError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NarrationError::Transport(format!("request timed out: {e}"))
                } else {
                    NarrationError::Transport(format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NarrationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let reply: NarrationReply = response
            .json()
            .await
            .map_err(|e| NarrationError::Malformed(format!("failed to parse reply: {e}")))?;

        tracing::debug!(endpoint = %self.endpoint, chars = reply.response.len(), "Narration reply received");
        Ok(reply.response)
    }
}
