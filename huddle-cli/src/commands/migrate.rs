//! Create the users and posts tables, then exit

use anyhow::{Context, Result};
use clap::Parser;

use huddle_server::create_store;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let store = create_store(&args.database_url, 1)
        .await
        .context("Failed to open store")?;
    store.migrate().await.context("Failed to run migrations")?;

    tracing::info!("Database is up to date");
    Ok(())
}
