//! Shared state for the narration server.

use std::sync::Arc;

use nexus_core::allocator::ContributionAllocator;
use nexus_core::narration::box_narrator::BoxNarrator;
use nexus_core::narration::service::NarrationService;
use nexus_infra::narration::build_narrator_for_mode;
use nexus_types::config::{NarrationMode, NexusConfig};

/// State cloned into every axum handler.
#[derive(Clone)]
pub struct AppState {
    pub allocator: Arc<ContributionAllocator>,
    pub narration: Arc<NarrationService>,
}

impl AppState {
    /// Wire the server. It always narrates through the LLM: pointing the HTTP
    /// narrator at itself would loop. Without an API key the narrator is
    /// offline and `/api/ai/chat` answers 500 with the fallback.
    pub fn for_server(config: NexusConfig) -> Self {
        let narrator = build_narrator_for_mode(&config, NarrationMode::Llm);
        Self::with_narrator(&config, narrator)
    }

    pub fn with_narrator(config: &NexusConfig, narrator: BoxNarrator) -> Self {
        let narration = NarrationService::from_config(narrator, &config.narration);
        Self {
            allocator: Arc::new(ContributionAllocator::new()),
            narration: Arc::new(narration),
        }
    }
}
