//! Ledger HTTP server.
//!
//! Reads `app.env` from `CONFIG_PATH` (default: current directory), creates the database and
//! schema when missing, then serves the API on `SERVER_ADDRESS`.

use simple_bank::{apply_migrations, app, connect, ensure_database_exists, load_config, AppState};
use tokio::net::TcpListener;

const DEFAULT_ADDRESS: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("simple_bank=info,simple_bank_server=info,tower_http=info")
            }),
        )
        .init();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| ".".into());
    let config = load_config(&config_path)?;
    tracing::info!(path = %config_path, driver = %config.db_driver, "configuration loaded");

    ensure_database_exists(&config.db_source).await?;
    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;

    let address = if config.server_address.is_empty() {
        DEFAULT_ADDRESS
    } else {
        config.server_address.as_str()
    };
    let listener = TcpListener::bind(address).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(AppState::new(pool))).await?;
    Ok(())
}
