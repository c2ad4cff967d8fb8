//! Session accumulator: applies an allocation to a running total.

use nexus_types::allocation::{ContributionAllocation, SessionTokenCounter};

/// Return a new counter with `min(total + tokens_awarded, 100)`.
pub fn apply_allocation(
    counter: SessionTokenCounter,
    allocation: &ContributionAllocation,
) -> SessionTokenCounter {
    SessionTokenCounter::with_total(counter.total().saturating_add(allocation.tokens_awarded))
}
