//! HTTP server command
//!
//! Opens the store, creates the collections if needed and serves until
//! Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use huddle_server::db::DEFAULT_MAX_CONNECTIONS;
use huddle_server::http::server::DEFAULT_TIMEOUT_SECS;
use huddle_server::{create_store, run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Database URL: postgres://... or memory://
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let store = create_store(&database_url, args.max_connections)
        .await
        .context("Failed to open store")?;
    store.migrate().await.context("Failed to run migrations")?;

    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
        request_timeout: Duration::from_secs(args.timeout),
    };
    tracing::info!("Starting huddle server on {}", config.bind_addr);

    run_server(store, config).await.context("Server error")?;

    Ok(())
}
