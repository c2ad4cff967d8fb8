//! LLM provider implementations.
//!
//! Narration only needs one backend shape: any OpenAI-compatible chat
//! completion API. [`create_provider`] builds it from the `[llm]` config.

pub mod openai_compat;

use secrecy::SecretString;

use nexus_core::llm::box_provider::BoxLlmProvider;
use nexus_types::config::LlmConfig;

use self::openai_compat::OpenAiCompatibleProvider;
use self::openai_compat::config::OpenAiCompatConfig;

/// Create a [`BoxLlmProvider`] from the `[llm]` config and a resolved API key.
pub fn create_provider(config: &LlmConfig, api_key: SecretString) -> BoxLlmProvider {
    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig {
        provider_name: config.provider.clone(),
        base_url: config.base_url.clone(),
        api_key,
        model: config.model.clone(),
    });
    BoxLlmProvider::new(provider)
}
