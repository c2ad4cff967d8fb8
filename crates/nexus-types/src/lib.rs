//! Shared domain types for Explorer Nexus.
//!
//! This crate contains the value types passed between the scoring core,
//! the narration collaborator and the application layer: allocations,
//! session counters, narration wire shapes, configuration and errors.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod allocation;
pub mod config;
pub mod error;
pub mod llm;
pub mod narration;
