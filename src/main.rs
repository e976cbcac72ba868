use std::sync::Arc;

mod app;
mod client_ip;
mod config;
mod db;
mod error;
mod informations;
mod locations;
mod phone;
mod state;
mod store;

use crate::{config::AppConfig, db::PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "imdad_intake=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = Arc::new(AppConfig::from_env()?);
    tracing::info!(environment = config.environment.as_str(), "starting");

    // No store, no service.
    let store = match PgStore::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "database connection failed");
            return Err(e);
        }
    };
    app::run(config, store).await
}
