//! POST /api/ai/chat - narrate an already-computed allocation.
//!
//! Accounting happened on the client before this call; the route only turns
//! `{message, allocation, sessionTokens}` into persona text.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;

use nexus_types::narration::{NarrationReply, NarrationRequest};

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn narrate(
    State(state): State<AppState>,
    payload: Result<Json<NarrationRequest>, JsonRejection>,
) -> Result<Json<NarrationReply>, AppError> {
    let Json(request) = payload?;

    tracing::debug!(
        tokens_awarded = request.allocation.tokens_awarded,
        session_tokens = request.session_tokens,
        "Narration requested"
    );

    let response = state
        .narration
        .try_narrate(&request)
        .await
        .map_err(|source| AppError::Narration {
            fallback: state.narration.fallback().to_string(),
            source,
        })?;

    Ok(Json(NarrationReply { response }))
}
