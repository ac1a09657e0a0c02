//! componentes CLI - HTTP CRUD service for hardware components
//!
//! Entry point for the `componentes` binary:
//! - `serve`: bootstrap the table and run the HTTP server
//! - `migrate`: bootstrap the table and exit

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use componentes_server::config::{DbConfig, HttpConfig};
use componentes_server::db::{bootstrap, create_pool};
use componentes_server::http::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "componentes",
    author,
    version,
    about = "HTTP CRUD service for hardware components backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
    /// Create the componentes table if missing, then exit
    Migrate,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind to (overrides the PORT environment variable)
    #[arg(long, short = 'b')]
    bind: Option<SocketAddr>,

    /// Directory served as static assets
    #[arg(long, env = "PUBLIC_DIR")]
    public_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Environment first so config reads see .env values
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
        Commands::Migrate => run_migrate().await,
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from_env();
    let http_config = HttpConfig::from_env();

    let pool = create_pool(db_config.connect_options())
        .await
        .context("Failed to create database pool")?;

    bootstrap::run(&pool)
        .await
        .context("Failed to bootstrap componentes table")?;

    let mut config = ServerConfig::from(http_config);
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(dir) = args.public_dir {
        config.public_dir = Some(dir);
    }

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}

async fn run_migrate() -> Result<()> {
    let db_config = DbConfig::from_env();

    let pool = create_pool(db_config.connect_options())
        .await
        .context("Failed to create database pool")?;

    bootstrap::run(&pool)
        .await
        .context("Failed to bootstrap componentes table")?;

    tracing::info!("Migration complete");
    Ok(())
}
