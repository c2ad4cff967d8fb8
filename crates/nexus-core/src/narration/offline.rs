//! A narrator that is never available.
//!
//! Used for `nexus chat --offline`, for `narration.mode = "offline"`, and as
//! the degraded choice when `llm` mode has no API key.

use nexus_types::error::NarrationError;
use nexus_types::narration::NarrationRequest;

use super::narrator::Narrator;

#[derive(Debug, Default)]
pub struct OfflineNarrator;

impl Narrator for OfflineNarrator {
    fn name(&self) -> &str {
        "offline"
    }

    async fn narrate(&self, _request: &NarrationRequest) -> Result<String, NarrationError> {
        Err(NarrationError::Disabled)
    }
}
