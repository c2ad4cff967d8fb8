//! HTTP request handlers.

pub mod allocation;
pub mod health;
pub mod narration;
