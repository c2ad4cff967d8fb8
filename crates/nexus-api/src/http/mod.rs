//! HTTP layer for the narration server.
//!
//! Plain JSON bodies (no envelope): the narration route speaks the same
//! `{response}` / `{error}` shapes the chat client expects.

pub mod error;
pub mod handlers;
pub mod router;
