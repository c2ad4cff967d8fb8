//! Narrator implementations and the narrator factory.

pub mod http;

use std::time::Duration;

use nexus_core::narration::box_narrator::BoxNarrator;
use nexus_core::narration::llm_narrator::LlmNarrator;
use nexus_core::narration::offline::OfflineNarrator;
use nexus_types::config::{NarrationMode, NexusConfig};

use crate::config::resolve_api_key;
use crate::llm::create_provider;

use self::http::HttpNarrator;

/// Build the narrator selected by `narration.mode`.
///
/// Never fails: when the selected mode cannot be set up (no API key, bad
/// endpoint) a warning is logged and the offline narrator is used, so every
/// reply becomes the fallback while accounting keeps working.
pub fn build_narrator(config: &NexusConfig) -> BoxNarrator {
    build_narrator_for_mode(config, config.narration.mode)
}

pub fn build_narrator_for_mode(config: &NexusConfig, mode: NarrationMode) -> BoxNarrator {
    match mode {
        NarrationMode::Http => {
            let timeout = Duration::from_millis(config.narration.timeout_ms);
            match HttpNarrator::new(config.narration.endpoint.clone(), timeout) {
                Ok(narrator) => {
                    tracing::info!(endpoint = %narrator.endpoint(), "Using HTTP narrator");
                    BoxNarrator::new(narrator)
                }
                Err(err) => {
                    tracing::warn!(error = %err, "HTTP narrator unavailable, narration offline");
                    BoxNarrator::new(OfflineNarrator)
                }
            }
        }
        NarrationMode::Llm => match resolve_api_key(&config.llm) {
            Ok(api_key) => {
                let provider = create_provider(&config.llm, api_key);
                tracing::info!(provider = %provider.name(), model = %config.llm.model, "Using LLM narrator");
                BoxNarrator::new(LlmNarrator::new(provider, config.llm.clone()))
            }
            Err(err) => {
                tracing::warn!(error = %err, "LLM narrator unavailable, narration offline");
                BoxNarrator::new(OfflineNarrator)
            }
        },
        NarrationMode::Offline => BoxNarrator::new(OfflineNarrator),
    }
}
