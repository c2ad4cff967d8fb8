//! Contribution session.
//!
//! Owns one session's token counter and runs the per-message flow:
//! allocate, apply, then narrate. Accounting is committed before the
//! narration call starts, so a failed, timed-out or dropped narration never
//! rolls back the award.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use nexus_types::allocation::{
    ContributionAllocation, ContributionRecord, SessionSummary, SessionTokenCounter,
};
use nexus_types::narration::NarrationRequest;

use crate::accumulator::apply_allocation;
use crate::allocator::ContributionAllocator;
use crate::narration::service::NarrationService;

/// Everything the display layer needs after one contribution.
#[derive(Debug, Clone)]
pub struct ContributionTurn {
    pub allocation: ContributionAllocation,
    pub session_total: u32,
    /// Narrated text, or the fallback message.
    pub reply: String,
    pub narrated: bool,
}

pub struct ContributionSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    allocator: ContributionAllocator,
    counter: SessionTokenCounter,
    contributions: u32,
}

impl Default for ContributionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributionSession {
    /// Start a session at zero tokens with the default rule table.
    pub fn new() -> Self {
        Self::with_allocator(ContributionAllocator::new())
    }

    pub fn with_allocator(allocator: ContributionAllocator) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            allocator,
            counter: SessionTokenCounter::new(),
            contributions: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn counter(&self) -> SessionTokenCounter {
        self.counter
    }

    pub fn total(&self) -> u32 {
        self.counter.total()
    }

    pub fn contributions(&self) -> u32 {
        self.contributions
    }

    /// Score a message and apply it to the counter.
    pub fn record(&mut self, message: &str) -> ContributionRecord {
        let allocation = self.allocator.allocate(message);
        self.counter = apply_allocation(self.counter, &allocation);
        self.contributions += 1;

        tracing::info!(
            session_id = %self.id,
            tokens_awarded = allocation.tokens_awarded,
            reason = %allocation.reason,
            session_total = self.counter.total(),
            "Contribution recorded"
        );

        ContributionRecord {
            allocation,
            session_total: self.counter.total(),
        }
    }

    /// Record a contribution, then narrate it.
    ///
    /// The counter is updated before the narration future is awaited.
    pub async fn process(
        &mut self,
        message: &str,
        narration: &NarrationService,
    ) -> ContributionTurn {
        let record = self.record(message);
        let request = NarrationRequest {
            message: message.to_string(),
            allocation: record.allocation.clone(),
            session_tokens: record.session_total,
        };

        let narrated = narration.narrate(&request).await;

        ContributionTurn {
            allocation: record.allocation,
            session_total: record.session_total,
            reply: narrated.text,
            narrated: narrated.narrated,
        }
    }

    /// External reset of the running total. The contribution count is kept.
    pub fn reset(&mut self) {
        tracing::info!(session_id = %self.id, previous_total = self.counter.total(), "Session tokens reset");
        self.counter = SessionTokenCounter::new();
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            session_id: self.id,
            started_at: self.started_at,
            contributions: self.contributions,
            total: self.counter.total(),
        }
    }
}
