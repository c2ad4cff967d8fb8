//! Interactive contribution session.
//!
//! Each line the user submits is scored, added to the session total and then
//! narrated. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
