//! Wire shapes exchanged with the narration collaborator.
//!
//! Request:
//! ```json
//! {
//!   "message": "I finished the audit",
//!   "allocation": { "tokens_awarded": 25, "reason": "Task completion", "solana_tx_mock": "mock_..." },
//!   "sessionTokens": 25
//! }
//! ```
//!
//! Reply: `{ "response": "..." }`, or `{ "error": "..." }` with a non-success status.

use serde::{Deserialize, Serialize};

use crate::allocation::ContributionAllocation;

/// Text shown in place of a narration whenever the collaborator is unavailable.
pub const FALLBACK_MESSAGE: &str = "Explorer Nexus offline. Retry expedition.";

/// First assistant line of every chat session.
pub const GREETING: &str =
    "Hello! I'm your Web3 explorer guide. How can I help you navigate the blockchain today?";

/// Request sent to the narration collaborator after accounting has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationRequest {
    /// The user's raw message, unmodified.
    pub message: String,
    pub allocation: ContributionAllocation,
    /// Session total after this allocation was applied.
    #[serde(rename = "sessionTokens")]
    pub session_tokens: u32,
}

/// Successful reply from the narration collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationReply {
    pub response: String,
}

/// Error body returned by the narration endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationErrorBody {
    pub error: String,
}
