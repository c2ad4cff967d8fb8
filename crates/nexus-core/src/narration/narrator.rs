//! Narrator trait definition.

use nexus_types::error::NarrationError;
use nexus_types::narration::NarrationRequest;

/// A text-generation collaborator that narrates an allocation.
///
/// Implementations return the reply text as received; emptiness checks,
/// timeouts and fallback substitution belong to
/// [`super::service::NarrationService`].
pub trait Narrator: Send + Sync {
    /// Short name used in logs (e.g., "http", "openai", "offline").
    fn name(&self) -> &str;

    /// Make a single narration attempt.
    fn narrate(
        &self,
        request: &NarrationRequest,
    ) -> impl std::future::Future<Output = Result<String, NarrationError>> + Send;
}
