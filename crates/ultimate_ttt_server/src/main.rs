//! Ultimate Tic-Tac-Toe - Unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;
use ultimate_ttt::Mark;
use ultimate_ttt_server::cli::{self, Cli, Command};
use ultimate_ttt_server::{GameStore, ServerConfig, router};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => run_server(config, host, port).await,
        Command::Replay { starting, moves } => run_replay(starting, moves),
    }
}

/// Run the HTTP game server
async fn run_server(config: Option<PathBuf>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let config = ServerConfig::load(config.as_deref())?.with_overrides(host, port);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    info!(host = %config.host(), port = config.port(), "Starting Ultimate Tic-Tac-Toe server");

    let app = router(GameStore::new());
    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!(addr = %listener.local_addr()?, "Server ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Replay a move list and print the result
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay(starting: Mark, moves: Vec<String>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    match cli::replay(starting, &moves) {
        Ok(history) => {
            let state = history.latest();
            println!("{}", state.render());
            println!("{}", state.status());
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Replay stopped");
            Err(e.into())
        }
    }
}
