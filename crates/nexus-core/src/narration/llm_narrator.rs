//! Narrator backed directly by an LLM provider.
//!
//! Builds the Explorer Nexus persona prompt and returns the first choice's
//! text. This is what the narration server runs behind `POST /api/ai/chat`,
//! and what `nexus chat` uses in `llm` mode.

use nexus_types::config::LlmConfig;
use nexus_types::error::NarrationError;
use nexus_types::llm::LlmError;
use nexus_types::narration::NarrationRequest;

use crate::llm::box_provider::BoxLlmProvider;
use crate::prompt::NarrationPromptBuilder;

use super::narrator::Narrator;

pub struct LlmNarrator {
    provider: BoxLlmProvider,
    llm: LlmConfig,
}

impl LlmNarrator {
    pub fn new(provider: BoxLlmProvider, llm: LlmConfig) -> Self {
        Self { provider, llm }
    }
}

impl Narrator for LlmNarrator {
    fn name(&self) -> &str {
        self.provider.name()
    }

    async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarrationError> {
        let completion = NarrationPromptBuilder::completion_request(request, &self.llm);
        let response = self
            .provider
            .complete(&completion)
            .await
            .map_err(map_llm_error)?;

        tracing::debug!(
            provider = %self.provider.name(),
            model = %response.model,
            response_id = %response.id,
            "LLM narration complete"
        );
        Ok(response.content)
    }
}

fn map_llm_error(err: LlmError) -> NarrationError {
    match err {
        LlmError::Deserialization(msg) => NarrationError::Malformed(msg),
        other => NarrationError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::llm::provider::LlmProvider;
    use nexus_types::allocation::ContributionAllocation;
    use nexus_types::llm::{CompletionRequest, CompletionResponse};

    struct RecordingProvider {
        seen: Arc<Mutex<Vec<CompletionRequest>>>,
        fail: bool,
    }

    impl LlmProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.seen.lock().unwrap().push(request.clone());
            if self.fail {
                return Err(LlmError::AuthenticationFailed);
            }
            Ok(CompletionResponse {
                id: "chatcmpl-1".to_string(),
                content: "⚡ Objective secured. 25 tokens logged. What's next, explorer?".to_string(),
                model: request.model.clone(),
            })
        }
    }

    fn request() -> NarrationRequest {
        NarrationRequest {
            message: "finished the audit".to_string(),
            allocation: ContributionAllocation {
                tokens_awarded: 25,
                reason: "Task completion".to_string(),
                reference_id: "mock_7".to_string(),
            },
            session_tokens: 40,
        }
    }

    #[tokio::test]
    async fn test_llm_narrator_sends_persona_prompt() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let narrator = LlmNarrator::new(
            BoxLlmProvider::new(RecordingProvider {
                seen: seen.clone(),
                fail: false,
            }),
            LlmConfig::default(),
        );

        let reply = narrator.narrate(&request()).await.unwrap();
        assert!(reply.contains("Objective secured"));
        assert_eq!(narrator.name(), "recording");

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let system = seen[0].system.clone().unwrap_or_default();
        assert!(system.contains("Session progress: 40/100 tokens"));
        assert_eq!(seen[0].messages[0].content, "finished the audit");
    }

    #[tokio::test]
    async fn test_llm_error_maps_to_narration_error() {
        let narrator = LlmNarrator::new(
            BoxLlmProvider::new(RecordingProvider {
                seen: Arc::new(Mutex::new(Vec::new())),
                fail: true,
            }),
            LlmConfig::default(),
        );
        let err = narrator.narrate(&request()).await.unwrap_err();
        assert!(matches!(err, NarrationError::Transport(ref m) if m == "authentication failed"));
    }

    #[test]
    fn test_deserialization_error_is_malformed() {
        let err = map_llm_error(LlmError::Deserialization("bad json".to_string()));
        assert!(matches!(err, NarrationError::Malformed(_)));
    }
}
