//! Axum router configuration with middleware.
//!
//! Routes: `POST /api/ai/chat`, `POST /api/allocations`, `GET /health`.
//! Middleware: permissive CORS, request tracing.

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/ai/chat", post(handlers::narration::narrate))
        .route("/allocations", post(handlers::allocation::create_allocation));

    Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::{Value, json};

    use nexus_core::narration::box_narrator::BoxNarrator;
    use nexus_core::narration::narrator::Narrator;
    use nexus_core::narration::offline::OfflineNarrator;
    use nexus_types::config::NexusConfig;
    use nexus_types::error::NarrationError;
    use nexus_types::narration::NarrationRequest;

    use super::*;

    /// Echoes the allocation back so tests can see what reached the narrator.
    struct EchoNarrator;

    impl Narrator for EchoNarrator {
        fn name(&self) -> &str {
            "echo"
        }

        async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarrationError> {
            Ok(format!(
                "+{} ({}) at {}/100",
                request.allocation.tokens_awarded, request.allocation.reason, request.session_tokens
            ))
        }
    }

    struct SlowNarrator;

    impl Narrator for SlowNarrator {
        fn name(&self) -> &str {
            "slow"
        }

        async fn narrate(&self, _request: &NarrationRequest) -> Result<String, NarrationError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("late".to_string())
        }
    }

    async fn spawn(narrator: BoxNarrator, config: NexusConfig) -> String {
        let state = AppState::with_narrator(&config, narrator);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, build_router(state)).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn chat_body() -> Value {
        json!({
            "message": "finished the smart contract",
            "allocation": {
                "tokens_awarded": 45,
                "reason": "Technical contribution",
                "solana_tx_mock": "mock_123"
            },
            "sessionTokens": 45
        })
    }

    #[tokio::test]
    async fn test_health() {
        let base = spawn(BoxNarrator::new(OfflineNarrator), NexusConfig::default()).await;
        let body: Value = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_chat_returns_narration() {
        let base = spawn(BoxNarrator::new(EchoNarrator), NexusConfig::default()).await;
        let response = reqwest::Client::new()
            .post(format!("{base}/api/ai/chat"))
            .json(&chat_body())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["response"], "+45 (Technical contribution) at 45/100");
    }

    #[tokio::test]
    async fn test_chat_offline_returns_500_with_fallback() {
        let base = spawn(BoxNarrator::new(OfflineNarrator), NexusConfig::default()).await;
        let response = reqwest::Client::new()
            .post(format!("{base}/api/ai/chat"))
            .json(&chat_body())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({ "error": "Explorer Nexus offline. Retry expedition." }));
    }

    #[tokio::test]
    async fn test_chat_timeout_uses_configured_fallback() {
        let mut config = NexusConfig::default();
        config.narration.timeout_ms = 50;
        config.narration.fallback_message = "Signal lost.".to_string();
        let base = spawn(BoxNarrator::new(SlowNarrator), config).await;

        let response = reqwest::Client::new()
            .post(format!("{base}/api/ai/chat"))
            .json(&chat_body())
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "Signal lost.");
    }

    #[tokio::test]
    async fn test_chat_malformed_body_is_400() {
        let base = spawn(BoxNarrator::new(EchoNarrator), NexusConfig::default()).await;
        let response = reqwest::Client::new()
            .post(format!("{base}/api/ai/chat"))
            .json(&json!({ "message": "no allocation" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 400);
        let body: Value = response.json().await.unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_allocations_applies_to_supplied_total() {
        let base = spawn(BoxNarrator::new(OfflineNarrator), NexusConfig::default()).await;
        let response = reqwest::Client::new()
            .post(format!("{base}/api/allocations"))
            .json(&json!({ "message": "We finished the Solana build together", "sessionTokens": 80 }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["allocation"]["tokens_awarded"], 50);
        assert_eq!(body["allocation"]["reason"], "Task completion");
        assert!(
            body["allocation"]["solana_tx_mock"]
                .as_str()
                .unwrap()
                .starts_with("mock_")
        );
        assert_eq!(body["sessionTokens"], 100);
    }

    #[tokio::test]
    async fn test_allocations_defaults_and_clamps_prior_total() {
        let base = spawn(BoxNarrator::new(OfflineNarrator), NexusConfig::default()).await;
        let client = reqwest::Client::new();

        let body: Value = client
            .post(format!("{base}/api/allocations"))
            .json(&json!({ "message": "hello" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["allocation"]["tokens_awarded"], 5);
        assert_eq!(body["sessionTokens"], 5);

        let body: Value = client
            .post(format!("{base}/api/allocations"))
            .json(&json!({ "message": "hello", "sessionTokens": -40 }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["sessionTokens"], 5);
    }
}
