//! Contribution scoring and narration logic for Explorer Nexus.
//!
//! This crate defines the allocator, the session accumulator and the
//! narration "ports" (traits) that the infrastructure layer implements. It
//! depends only on `nexus-types` -- never on `nexus-infra` or any HTTP crate.

pub mod accumulator;
pub mod allocator;
pub mod llm;
pub mod narration;
pub mod prompt;
pub mod session;
