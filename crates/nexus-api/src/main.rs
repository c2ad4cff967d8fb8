//! Explorer Nexus CLI and narration server entry point.
//!
//! Binary name: `nexus`
//!
//! Parses CLI arguments, loads `config.toml` from the data directory, then
//! dispatches to the scoring command, the interactive chat loop or the
//! axum narration server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use nexus_infra::config::{apply_env_overrides, load_config, resolve_data_dir};
use nexus_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.tracing_options())
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "nexus", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = resolve_data_dir();
    let mut config = load_config(&data_dir).await;
    apply_env_overrides(&mut config);
    tracing::debug!(data_dir = %data_dir.display(), mode = %config.narration.mode, "Configuration loaded");

    let result = match cli.command {
        Commands::Score { message } => cli::score::score(&message.join(" "), cli.json),

        Commands::Chat { offline } => cli::chat::loop_runner::run_chat_loop(&config, offline, cli.json).await,

        Commands::Serve { host, port, .. } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            serve(AppState::for_server(config), &host, port).await
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

async fn serve(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!(
        "  {} Explorer Nexus listening on {} (narrator: {})",
        console::style("⚡").bold(),
        console::style(format!("http://{addr}")).cyan(),
        console::style(state.narration.narrator_name()).dim()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
