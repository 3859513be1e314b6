use std::sync::Arc;

use anyhow::{Context, Result};
use refinery::config::{Config, ConfigDbType};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use server::api::run_api_server;
use server::config::ServerConfig;
use server::db::postgres::PgScoreStore;
use server::db::ScoreStore;

mod migrations {
    use refinery::embed_migrations;
    embed_migrations!("./migrations");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if exists
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env();

    // Run migrations
    let mut db_config = refinery_config(&config.database_url)?;
    migrations::migrations::runner()
        .run_async(&mut db_config)
        .await
        .context("Failed to run database migrations")?;
    info!("Database migrations completed");

    // Create database pool
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .context("Failed to create PostgreSQL connection pool")?;

    let store: Arc<dyn ScoreStore> = Arc::new(PgScoreStore::new(pool));

    run_api_server(&config.listen_addr, store, config.web_dir.as_deref()).await
}

/// Translates the connection string into a refinery runner configuration.
fn refinery_config(database_url: &str) -> Result<Config> {
    let url = url::Url::parse(database_url).context("Invalid database URL")?;

    let mut config = Config::new(ConfigDbType::Postgres);
    if let Some(host) = url.host_str() {
        config = config.set_db_host(host);
    }
    if let Some(port) = url.port() {
        config = config.set_db_port(&port.to_string());
    }
    let username = url.username();
    if !username.is_empty() {
        config = config.set_db_user(username);
    }
    if let Some(password) = url.password() {
        config = config.set_db_pass(password);
    }
    if let Some(db_name) = url.path_segments().and_then(|segments| segments.last()) {
        if !db_name.is_empty() {
            config = config.set_db_name(db_name);
        }
    }
    Ok(config)
}
