use std::{path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;
use tokio::{io::BufReader, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adminbot::{
    config::{Config, DEFAULT_CONFIG_PATH},
    console::{self, StdoutResponder},
    dispatch::{Message, Responder},
    state::AppState,
};
use adminbot_core::admin::UserId;

/// adminbot - Manage a bot's admin allow-list from the owner account
#[derive(Parser, Debug)]
#[command(name = "adminbot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// YAML file consulted for DB_TYPE when it is not in the environment
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH, env = "ADMINBOT_CONFIG")]
    config: PathBuf,

    /// Sender identity for a single command (omit for an anonymous sender)
    #[arg(long, allow_negative_numbers = true)]
    caller: Option<i64>,

    /// Run one command and exit, e.g. `/add_admin 42`. Reads commands from
    /// stdin when omitted.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr; stdout carries replies
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adminbot=info,adminbot_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env(&cli.config)?;
    let state = AppState::initialize(&config).await?;
    let output: Arc<dyn Responder> = Arc::new(StdoutResponder::new());

    if cli.command.is_empty() {
        let reader = BufReader::new(tokio::io::stdin());
        let dispatched = console::run(state.router(), reader, output, shutdown_signal()).await?;
        tracing::info!(dispatched, "Console stopped");
    } else {
        let message = Message::new(cli.caller.map(UserId::new), cli.command.join(" "));
        if !state.router().dispatch(&message, output.as_ref()).await {
            tracing::warn!(text = %message.text, "Not an admin command");
        }
    }

    state.shutdown().await;
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed, that signal is never reported.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
