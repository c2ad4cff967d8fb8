//! Narration: turning an allocation into a stylised reply.
//!
//! - `Narrator`: RPITIT port implemented by the HTTP client (nexus-infra),
//!   the in-process LLM narrator and the offline narrator
//! - `BoxNarrator`: object-safe wrapper for runtime selection
//! - `NarrationService`: bounded wait plus fallback substitution

pub mod box_narrator;
pub mod llm_narrator;
pub mod narrator;
pub mod offline;
pub mod service;
