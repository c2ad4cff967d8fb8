//! Banner, per-turn display and end-of-session summary for the chat loop.

use std::io::Write;

use console::style;

use nexus_core::session::ContributionTurn;
use nexus_types::allocation::{SessionSummary, SessionTokenCounter};

/// Print the welcome banner at the start of a chat session.
pub fn print_welcome_banner(session_id: &str, narrator: &str) {
    println!();
    println!("  {} {}", "🧭", style("Explorer Nexus").cyan().bold());
    println!("  {}", style("Merit-based token allocation for blockchain expeditions").dim());
    println!();
    println!("  {}  {}", style("Narrator:").bold(), style(narrator).dim());
    println!(
        "  {}   {}",
        style("Session:").bold(),
        style(&session_id[..8.min(session_id.len())]).dim()
    );
    println!();
    println!("  {}", style("Type /help for commands, Ctrl+D to exit").dim());
    println!("  {}", style("---").dim());
    println!();
}

/// Print the assistant reply followed by the allocation and session progress.
pub fn write_turn(out: &mut impl Write, turn: &ContributionTurn) -> std::io::Result<()> {
    writeln!(out)?;
    let reply = if turn.narrated {
        style(turn.reply.as_str()).white()
    } else {
        style(turn.reply.as_str()).yellow()
    };
    writeln!(out, "  {} {}", style("Nexus >").cyan().bold(), reply)?;
    writeln!(
        out,
        "  {} {} tokens · {} · {}",
        style("+").green().bold(),
        turn.allocation.tokens_awarded,
        turn.allocation.reason,
        style(&turn.allocation.reference_id).dim()
    )?;
    writeln!(out, "  {}", progress_line(turn.session_total))?;
    writeln!(out)?;
    Ok(())
}

pub fn write_tokens(out: &mut impl Write, total: u32) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "  {}", progress_line(total))?;
    writeln!(out)?;
    Ok(())
}

fn progress_line(total: u32) -> String {
    let counter = SessionTokenCounter::with_total(total);
    let label = counter.progress_label();
    if counter.is_saturated() {
        format!("{} {}", style(label).green().bold(), style("(cap reached)").dim())
    } else {
        format!("{}", style(label).bold())
    }
}

pub fn print_session_summary(summary: &SessionSummary) {
    let elapsed = chrono::Utc::now() - summary.started_at;
    println!();
    println!("  {}", style("Session ended.").dim());
    println!(
        "  {} contribution(s), {} in {}m {}s",
        summary.contributions,
        SessionTokenCounter::with_total(summary.total).progress_label(),
        elapsed.num_minutes(),
        elapsed.num_seconds() % 60
    );
    println!();
}
