use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;

use tracing::info;

use magicstream_api::{AppConfig, ApplicationServer, Database, Logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = Arc::new(AppConfig::parse());

    // guards are kept alive so the writer flushes and sentry stays connected
    let _guards = Logger::init(config.cargo_env, config.sentry_dsn.clone());

    info!("logger and env prepped, connecting to the database...");

    let db = Database::connect(&config.database_url, config.run_migrations)
        .await
        .context("database loading failed")?;

    info!("connection pool ok, starting server...");

    ApplicationServer::serve(config, db)
        .await
        .context("could not start the movie server")?;

    Ok(())
}
