//! noughts - unified CLI
//!
//! Serves the game over HTTP, or answers a single board from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts_server::{AppState, ServerConfig, compute_move, compute_status, router};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = ServerConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Serve { port, host, seed } => {
            let config = apply_overrides(config, host, port, seed);
            run_http_server(config).await
        }
        Command::Move {
            board,
            difficulty,
            mark,
            seed,
        } => run_move(&config, &board, difficulty, mark, seed),
        Command::Status { board } => run_status(&board),
    }
}

fn apply_overrides(
    mut config: ServerConfig,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<u64>,
) -> ServerConfig {
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }
    if seed.is_some() {
        config = config.with_rng_seed(seed);
    }
    config
}

/// Run the HTTP game server until Ctrl+C.
#[instrument(skip(config), fields(host = %config.host(), port = *config.port()))]
async fn run_http_server(config: ServerConfig) -> Result<()> {
    info!("Starting noughts HTTP server");

    let addr = (config.host().as_str(), *config.port());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;
    info!("Server ready at http://{addr}/");

    let app = router(AppState::new(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

/// Print the computer's move for one board.
#[instrument(skip(config))]
fn run_move(
    config: &ServerConfig,
    board: &str,
    difficulty: Option<String>,
    mark: Option<String>,
    seed: Option<u64>,
) -> Result<()> {
    let seed = seed.or(*config.rng_seed()).unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let difficulty = difficulty.as_deref();
    let mark = mark.as_deref();
    let mov = compute_move(config, Some(board), difficulty, mark, &mut rng)?;
    println!("{}", serde_json::to_string(&mov)?);
    Ok(())
}

/// Print the status of one board.
#[instrument]
fn run_status(board: &str) -> Result<()> {
    let status = compute_status(Some(board))?;
    println!("{}", serde_json::to_string(&status)?);
    Ok(())
}

fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,noughts_server=debug"));
    let stderr = fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .init();
}
