//! CLI command definitions for the `nexus` binary.

pub mod chat;
pub mod score;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use nexus_observe::tracing_setup::{TracingOptions, directive_for_verbosity};

/// Score contributions and chat with Explorer Nexus.
#[derive(Parser)]
#[command(name = "nexus", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit log events as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Subscriber settings for this invocation. OpenTelemetry export is only
    /// available to `serve --otel`.
    pub fn tracing_options(&self) -> TracingOptions {
        let otel = matches!(self.command, Commands::Serve { otel: true, .. });
        TracingOptions::new(directive_for_verbosity(self.verbose, self.quiet))
            .with_json(self.log_json)
            .with_otel(otel)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single contribution without starting a session.
    Score {
        /// Contribution text (multiple words are joined with spaces).
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Start an interactive contribution session.
    Chat {
        /// Skip narration; every reply is the offline fallback.
        #[arg(long)]
        offline: bool,
    },

    /// Start the narration server.
    Serve {
        /// Bind host (defaults to `server.host` from config.toml).
        #[arg(long)]
        host: Option<String>,

        /// Bind port (defaults to `server.port` from config.toml).
        #[arg(long, short)]
        port: Option<u16>,

        /// Export tracing spans via OpenTelemetry (stdout).
        #[arg(long)]
        otel: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
