//! Infrastructure layer for Explorer Nexus.
//!
//! Contains implementations of the ports defined in `nexus-core`: the HTTP
//! narration client, the OpenAI-compatible LLM provider, and config/data-dir
//! resolution.

pub mod config;
pub mod llm;
pub mod narration;
