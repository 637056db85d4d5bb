//! Database bootstrap: pool construction from [`Config`] and creation of a missing database.

use crate::config::Config;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use std::time::Duration;

const SUPPORTED_DRIVERS: [&str; 2] = ["postgres", "postgresql"];

/// Reject drivers other than PostgreSQL. An empty driver is accepted.
pub fn check_driver(driver: &str) -> Result<(), ConfigError> {
    if driver.is_empty() || SUPPORTED_DRIVERS.contains(&driver.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedDriver(driver.to_string()))
    }
}

/// Open a pool on `config.db_source`.
pub async fn connect(config: &Config) -> Result<PgPool, AppError> {
    check_driver(&config.db_driver)?;
    if config.db_driver.is_empty() {
        tracing::warn!("DB_DRIVER is not set, assuming postgres");
    }
    let opts = PgConnectOptions::from_str(&config.db_source)
        .map_err(|e| ConfigError::InvalidSource(e.to_string()))?;
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(30))
        .max_connections(10)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Connect to the server's `postgres` database and create the target database if it is missing.
/// Sources without a database name are left alone.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = admin_options(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the same server pointed at `postgres`, plus the target database name.
/// `None` when the source names no database or names `postgres` itself.
fn admin_options(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, ConfigError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::InvalidSource(e.to_string()))?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
