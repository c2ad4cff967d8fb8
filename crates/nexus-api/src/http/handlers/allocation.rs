//! POST /api/allocations - score a message against a client-held total.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use nexus_core::accumulator::apply_allocation;
use nexus_types::allocation::{ContributionAllocation, SESSION_TOKEN_CAP, SessionTokenCounter};

use crate::http::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AllocationRequest {
    pub message: String,
    /// Total before this message. Missing means a fresh session; values
    /// outside `[0, 100]` are clamped.
    #[serde(rename = "sessionTokens", default)]
    pub session_tokens: i64,
}

#[derive(Debug, Serialize)]
pub struct AllocationResponse {
    pub allocation: ContributionAllocation,
    #[serde(rename = "sessionTokens")]
    pub session_tokens: SessionTokenCounter,
}

pub async fn create_allocation(
    State(state): State<AppState>,
    payload: Result<Json<AllocationRequest>, JsonRejection>,
) -> Result<Json<AllocationResponse>, AppError> {
    let Json(request) = payload?;

    let allocation = state.allocator.allocate(&request.message);
    let prior = request.session_tokens.clamp(0, i64::from(SESSION_TOKEN_CAP)) as u32;
    let counter = apply_allocation(SessionTokenCounter::with_total(prior), &allocation);

    tracing::info!(
        tokens_awarded = allocation.tokens_awarded,
        reason = %allocation.reason,
        session_total = counter.total(),
        "Allocation computed"
    );

    Ok(Json(AllocationResponse {
        allocation,
        session_tokens: counter,
    }))
}
