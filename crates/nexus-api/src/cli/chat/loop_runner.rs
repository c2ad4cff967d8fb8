//! Main chat loop orchestration.
//!
//! Picks the narrator, prints the banner and greeting, then scores and
//! narrates every submitted line until the user exits.

use std::io::Write;

use console::style;

use nexus_core::narration::service::NarrationService;
use nexus_core::session::ContributionSession;
use nexus_infra::narration::build_narrator_for_mode;
use nexus_types::config::{NarrationMode, NexusConfig};
use nexus_types::narration::GREETING;

use super::banner::{print_session_summary, print_welcome_banner, write_tokens, write_turn};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// Run the interactive contribution session.
///
/// `offline` forces the always-unavailable narrator regardless of config.
pub async fn run_chat_loop(config: &NexusConfig, offline: bool, json: bool) -> anyhow::Result<()> {
    let mode = if offline {
        NarrationMode::Offline
    } else {
        config.narration.mode
    };
    let narrator = build_narrator_for_mode(config, mode);
    let narration = NarrationService::from_config(narrator, &config.narration);
    let mut session = ContributionSession::new();

    tracing::info!(
        session_id = %session.id(),
        narrator = %narration.narrator_name(),
        timeout_ms = narration.timeout().as_millis() as u64,
        "Chat session started"
    );

    print_welcome_banner(&session.id().to_string(), narration.narrator_name());
    println!("  {} {}", style("Nexus >").cyan().bold(), GREETING);
    println!();

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, mut out) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        match chat_input.read_line().await {
            InputEvent::Eof | InputEvent::Interrupted => break,
            InputEvent::Blank => continue,
            InputEvent::Message(text) => {
                if let Some(cmd) = commands::parse(&text) {
                    match cmd {
                        ChatCommand::Help => commands::print_help(&mut out)?,
                        ChatCommand::Tokens => write_tokens(&mut out, session.total())?,
                        ChatCommand::Reset => {
                            session.reset();
                            writeln!(out, "\n  {} Session tokens reset.", style("*").cyan().bold())?;
                            write_tokens(&mut out, session.total())?;
                        }
                        ChatCommand::Exit => break,
                        ChatCommand::Unknown(name) => {
                            writeln!(
                                out,
                                "\n  {} Unknown command: {}. Type /help for available commands.\n",
                                style("?").yellow().bold(),
                                style(name).dim()
                            )?;
                        }
                    }
                    continue;
                }

                writeln!(out, "  {}", style("narrating...").dim())?;
                let turn = session.process(&text, &narration).await;
                write_turn(&mut out, &turn)?;
            }
        }
    }

    chat_input.flush();
    drop(chat_input);

    let summary = session.summary();
    tracing::info!(
        session_id = %summary.session_id,
        contributions = summary.contributions,
        session_total = summary.total,
        "Chat session ended"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_session_summary(&summary);
    }

    Ok(())
}
