//! Slash command parsing for the chat loop.

use std::io::Write;

use console::style;

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    /// Show the running session total.
    Tokens,
    /// Reset the session total to zero.
    Reset,
    Exit,
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`, in which case the line
/// is a contribution.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/tokens" | "/t" => Some(ChatCommand::Tokens),
        "/reset" => Some(ChatCommand::Reset),
        "/exit" | "/quit" | "/q" => Some(ChatCommand::Exit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

pub fn print_help(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", style("Available commands:").bold())?;
    writeln!(out)?;
    writeln!(out, "  {}    Show this help message", style("/help").cyan())?;
    writeln!(out, "  {}  Show session tokens", style("/tokens").cyan())?;
    writeln!(out, "  {}   Reset session tokens to 0", style("/reset").cyan())?;
    writeln!(out, "  {}    End the session", style("/exit").cyan())?;
    writeln!(out)?;
    writeln!(
        out,
        "  {}",
        style("Anything else is scored as a contribution. Ctrl+D to exit.").dim()
    )?;
    writeln!(out)?;
    Ok(())
}
