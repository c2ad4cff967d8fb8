//! Narration service: one bounded attempt, fallback on any failure.
//!
//! Accounting has already happened by the time this runs, so nothing here
//! can fail the caller. Every error (transport, timeout, status, malformed
//! or empty reply) is logged and replaced by the fallback text.

use std::time::Duration;

use nexus_types::config::NarrationConfig;
use nexus_types::error::NarrationError;
use nexus_types::narration::{FALLBACK_MESSAGE, NarrationRequest};

use super::box_narrator::BoxNarrator;

/// Display text for one contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    pub text: String,
    /// False when `text` is the fallback message.
    pub narrated: bool,
}

/// Wraps a narrator with a timeout and the fallback message.
pub struct NarrationService {
    narrator: BoxNarrator,
    timeout: Duration,
    fallback: String,
}

impl NarrationService {
    pub fn new(narrator: BoxNarrator, timeout: Duration) -> Self {
        Self {
            narrator,
            timeout,
            fallback: FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Build from the `[narration]` config section.
    pub fn from_config(narrator: BoxNarrator, config: &NarrationConfig) -> Self {
        Self::new(narrator, Duration::from_millis(config.timeout_ms))
            .with_fallback(config.fallback_message.clone())
    }

    /// Override the fallback text. An empty override keeps the default.
    pub fn with_fallback(mut self, fallback: String) -> Self {
        if !fallback.trim().is_empty() {
            self.fallback = fallback;
        }
        self
    }

    pub fn narrator_name(&self) -> &str {
        self.narrator.name()
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Single attempt, surfacing the failure cause.
    pub async fn try_narrate(&self, request: &NarrationRequest) -> Result<String, NarrationError> {
        let reply = tokio::time::timeout(self.timeout, self.narrator.narrate(request))
            .await
            .map_err(|_| NarrationError::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            })??;

        if reply.trim().is_empty() {
            return Err(NarrationError::EmptyReply);
        }
        Ok(reply)
    }

    /// Narrate, substituting the fallback on any failure. Never errors.
    pub async fn narrate(&self, request: &NarrationRequest) -> Narration {
        match self.try_narrate(request).await {
            Ok(text) => {
                tracing::debug!(narrator = %self.narrator.name(), "Narration received");
                Narration {
                    text,
                    narrated: true,
                }
            }
            Err(err) => {
                tracing::warn!(
                    narrator = %self.narrator.name(),
                    error = %err,
                    "Narration unavailable, using fallback"
                );
                Narration {
                    text: self.fallback.clone(),
                    narrated: false,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::narrator::Narrator;
    use crate::narration::offline::OfflineNarrator;
    use nexus_types::allocation::ContributionAllocation;

    enum Behaviour {
        Reply(&'static str),
        Fail,
        Hang,
    }

    struct MockNarrator {
        behaviour: Behaviour,
    }

    impl Narrator for MockNarrator {
        fn name(&self) -> &str {
            "mock"
        }

        async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarrationError> {
            match self.behaviour {
                Behaviour::Reply(text) => Ok(format!("{text} ({})", request.session_tokens)),
                Behaviour::Fail => Err(NarrationError::Transport("connection refused".to_string())),
                Behaviour::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok("too late".to_string())
                }
            }
        }
    }

    fn service(behaviour: Behaviour) -> NarrationService {
        NarrationService::new(
            BoxNarrator::new(MockNarrator { behaviour }),
            Duration::from_millis(50),
        )
    }

    fn request() -> NarrationRequest {
        NarrationRequest {
            message: "done".to_string(),
            allocation: ContributionAllocation {
                tokens_awarded: 25,
                reason: "Task completion".to_string(),
                reference_id: "mock_1".to_string(),
            },
            session_tokens: 25,
        }
    }

    #[tokio::test]
    async fn test_successful_narration_is_passed_through() {
        let narration = service(Behaviour::Reply("Roger that")).narrate(&request()).await;
        assert!(narration.narrated);
        assert_eq!(narration.text, "Roger that (25)");
    }

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        let narration = service(Behaviour::Fail).narrate(&request()).await;
        assert!(!narration.narrated);
        assert_eq!(narration.text, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_timeout_uses_fallback() {
        let svc = service(Behaviour::Hang);
        let err = svc.try_narrate(&request()).await.unwrap_err();
        assert!(matches!(err, NarrationError::Timeout { timeout_ms: 50 }));

        let narration = svc.narrate(&request()).await;
        assert!(!narration.narrated);
        assert_eq!(narration.text, FALLBACK_MESSAGE);
    }

    struct Blank;

    impl Narrator for Blank {
        fn name(&self) -> &str {
            "blank"
        }

        async fn narrate(&self, _request: &NarrationRequest) -> Result<String, NarrationError> {
            Ok("  \n ".to_string())
        }
    }

    #[tokio::test]
    async fn test_blank_reply_is_treated_as_failure() {
        let svc = NarrationService::new(BoxNarrator::new(Blank), Duration::from_millis(50));
        assert!(matches!(
            svc.try_narrate(&request()).await,
            Err(NarrationError::EmptyReply)
        ));
        assert_eq!(svc.narrate(&request()).await.text, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn test_offline_narrator_always_falls_back() {
        let svc = NarrationService::new(BoxNarrator::new(OfflineNarrator), Duration::from_secs(1));
        assert_eq!(svc.narrator_name(), "offline");
        let narration = svc.narrate(&request()).await;
        assert!(!narration.narrated);
    }

    #[test]
    fn test_from_config_applies_timeout_and_fallback() {
        let config = NarrationConfig {
            timeout_ms: 1_500,
            fallback_message: "Comms down.".to_string(),
            ..NarrationConfig::default()
        };
        let svc = NarrationService::from_config(BoxNarrator::new(OfflineNarrator), &config);
        assert_eq!(svc.timeout(), Duration::from_millis(1_500));
        assert_eq!(svc.fallback(), "Comms down.");
    }

    #[test]
    fn test_empty_fallback_override_keeps_default() {
        let svc = NarrationService::new(BoxNarrator::new(OfflineNarrator), Duration::from_secs(1))
            .with_fallback("   ".to_string());
        assert_eq!(svc.fallback(), FALLBACK_MESSAGE);
    }
}
