//! BoxNarrator -- object-safe dynamic dispatch wrapper for Narrator.
//!
//! Same blanket-impl pattern as [`crate::llm::box_provider::BoxLlmProvider`].

use std::future::Future;
use std::pin::Pin;

use nexus_types::error::NarrationError;
use nexus_types::narration::NarrationRequest;

use super::narrator::Narrator;

/// Object-safe version of [`Narrator`] with boxed futures.
pub trait NarratorDyn: Send + Sync {
    fn name(&self) -> &str;

    fn narrate_boxed<'a>(
        &'a self,
        request: &'a NarrationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, NarrationError>> + Send + 'a>>;
}

impl<T: Narrator> NarratorDyn for T {
    fn name(&self) -> &str {
        Narrator::name(self)
    }

    fn narrate_boxed<'a>(
        &'a self,
        request: &'a NarrationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, NarrationError>> + Send + 'a>> {
        Box::pin(self.narrate(request))
    }
}

/// Type-erased narrator, chosen at runtime from configuration.
pub struct BoxNarrator {
    inner: Box<dyn NarratorDyn + Send + Sync>,
}

impl BoxNarrator {
    pub fn new<T: Narrator + 'static>(narrator: T) -> Self {
        Self {
            inner: Box::new(narrator),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarrationError> {
        self.inner.narrate_boxed(request).await
    }
}
