//! Contribution allocation and session counter types.
//!
//! A [`ContributionAllocation`] is produced once per user message and applied
//! once to a [`SessionTokenCounter`]. Neither is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tokens awarded to every contribution before any category bonus.
pub const BASE_TOKENS: u32 = 5;

/// Reason reported when no category rule fires.
pub const BASE_REASON: &str = "Base contribution";

/// Upper bound for a single allocation.
pub const MAX_TOKENS_PER_CONTRIBUTION: u32 = 50;

/// Upper bound for a session's running total.
pub const SESSION_TOKEN_CAP: u32 = 100;

/// Result of scoring a single contribution.
///
/// Serializes to the narration wire shape:
/// `{ "tokens_awarded": 25, "reason": "...", "solana_tx_mock": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionAllocation {
    /// Tokens awarded, always within `[BASE_TOKENS, MAX_TOKENS_PER_CONTRIBUTION]`.
    pub tokens_awarded: u32,
    /// Label of the last category rule that matched, or [`BASE_REASON`].
    pub reason: String,
    /// Opaque identifier for display and tracing. Not a ledger transaction.
    #[serde(rename = "solana_tx_mock")]
    pub reference_id: String,
}

/// Running token total for one session, saturating at [`SESSION_TOKEN_CAP`].
///
/// Only serializable; incoming totals go through [`SessionTokenCounter::with_total`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SessionTokenCounter {
    total: u32,
}

impl SessionTokenCounter {
    /// A fresh counter at zero.
    pub fn new() -> Self {
        Self { total: 0 }
    }

    /// A counter resumed from a known total; values above the cap are clamped.
    pub fn with_total(total: u32) -> Self {
        Self {
            total: total.min(SESSION_TOKEN_CAP),
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Whether the session has reached the cap.
    pub fn is_saturated(&self) -> bool {
        self.total >= SESSION_TOKEN_CAP
    }

    /// Display form used by the chat surfaces, e.g. `"35/100 tokens"`.
    pub fn progress_label(&self) -> String {
        format!("{}/{} tokens", self.total, SESSION_TOKEN_CAP)
    }
}

/// Outcome of recording one contribution against a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRecord {
    pub allocation: ContributionAllocation,
    /// Session total after the allocation was applied.
    pub session_total: u32,
}

/// Snapshot of a contribution session, shown when a chat ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub contributions: u32,
    pub total: u32,
}
