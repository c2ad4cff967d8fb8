//! Contribution allocator.
//!
//! Classifies a free-text contribution into a bounded token award and a
//! reason label using an ordered keyword rule table:
//!
//! | order | keywords                          | bonus | reason                         |
//! |-------|-----------------------------------|-------|--------------------------------|
//! | 1     | idea, solution, build             | +15   | Innovative thinking detected   |
//! | 2     | help, team, together              | +10   | Collaborative spirit           |
//! | 3     | blockchain, solana, ai            | +12   | Technical contribution         |
//! | 4     | completed, done, finished         | +20   | Task completion                |
//!
//! Bonuses stack on top of [`BASE_TOKENS`]. The reason is overwritten by
//! every matching rule, so the last match in table order wins. The award is
//! capped at [`MAX_TOKENS_PER_CONTRIBUTION`]. Matching is plain substring
//! search on the lowercased message ("ai" matches "maintain").

use nexus_types::allocation::{
    BASE_REASON, BASE_TOKENS, ContributionAllocation, MAX_TOKENS_PER_CONTRIBUTION,
};
use uuid::Uuid;

/// One row of the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRule {
    /// Lowercase trigger substrings; any one of them fires the rule.
    pub keywords: Vec<String>,
    pub bonus: u32,
    pub reason: String,
}

impl CategoryRule {
    /// Build a rule. Keywords are lowercased; empty keywords are dropped so a
    /// rule can never match every message.
    pub fn new(keywords: &[&str], bonus: u32, reason: &str) -> Self {
        Self {
            keywords: keywords
                .iter()
                .map(|k| k.to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            bonus,
            reason: reason.to_string(),
        }
    }

    /// Whether any keyword occurs in an already-lowercased message.
    pub fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// The default rule table, in evaluation order.
pub fn default_rules() -> Vec<CategoryRule> {
    vec![
        CategoryRule::new(&["idea", "solution", "build"], 15, "Innovative thinking detected"),
        CategoryRule::new(&["help", "team", "together"], 10, "Collaborative spirit"),
        CategoryRule::new(&["blockchain", "solana", "ai"], 12, "Technical contribution"),
        CategoryRule::new(&["completed", "done", "finished"], 20, "Task completion"),
    ]
}

/// Award and reason for a message, before a reference id is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub tokens: u32,
    pub reason: String,
}

/// Scores contributions against an ordered rule table.
#[derive(Debug, Clone)]
pub struct ContributionAllocator {
    rules: Vec<CategoryRule>,
}

impl Default for ContributionAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ContributionAllocator {
    /// Allocator using [`default_rules`].
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Allocator using a caller-supplied table. Order matters: the last
    /// matching rule provides the reason.
    pub fn with_rules(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Deterministic part of allocation: award and reason only.
    pub fn classify(&self, message: &str) -> Classification {
        let normalized = message.to_lowercase();

        let mut tokens = BASE_TOKENS;
        let mut reason = BASE_REASON;

        for rule in &self.rules {
            if rule.matches(&normalized) {
                tokens = tokens.saturating_add(rule.bonus);
                reason = &rule.reason;
            }
        }

        Classification {
            tokens: tokens.min(MAX_TOKENS_PER_CONTRIBUTION),
            reason: reason.to_string(),
        }
    }

    /// Score a contribution. Total over all inputs, including the empty string.
    pub fn allocate(&self, message: &str) -> ContributionAllocation {
        let Classification { tokens, reason } = self.classify(message);
        let allocation = ContributionAllocation {
            tokens_awarded: tokens,
            reason,
            reference_id: new_reference_id(),
        };

        tracing::debug!(
            tokens_awarded = allocation.tokens_awarded,
            reason = %allocation.reason,
            reference_id = %allocation.reference_id,
            "Contribution allocated"
        );

        allocation
    }
}

/// Score a contribution with the default rule table.
pub fn allocate(message: &str) -> ContributionAllocation {
    ContributionAllocator::new().allocate(message)
}

/// Fresh opaque reference id, e.g. `mock_01920f3a...`.
///
/// UUID v7 keeps ids unique within a process and roughly time-ordered.
pub fn new_reference_id() -> String {
    format!("mock_{}", Uuid::now_v7().simple())
}
