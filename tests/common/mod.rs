//! Shared fixtures for the query-layer integration tests.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use simple_bank::{apply_migrations, load_config, Account, CreateAccountParams, Queries};
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Set to `1` to skip the database suites on machines without PostgreSQL.
pub const SKIP_ENV: &str = "SKIP_DB_TESTS";

fn skip_requested() -> bool {
    std::env::var(SKIP_ENV).is_ok_and(|v| v == "1")
}

/// Queries against the database named in the crate's `app.env` (or `DB_SOURCE`), migrated.
/// Panics when the database is unreachable unless `SKIP_DB_TESTS=1`, which yields `None`.
pub async fn test_queries() -> Option<Queries> {
    if skip_requested() {
        eprintln!("{SKIP_ENV}=1, skipping database test");
        return None;
    }
    let config = load_config(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or_else(|e| panic!("load test config: {e} (set {SKIP_ENV}=1 to skip)"));
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.db_source)
        .await
        .unwrap_or_else(|e| {
            panic!(
                "connect to {}: {e} (set {SKIP_ENV}=1 to skip)",
                config.db_source
            )
        });
    apply_migrations(&pool).await.expect("apply migrations");
    Some(Queries::new(pool))
}

pub fn random_int(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

pub fn random_owner() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect()
}

pub fn random_money() -> i64 {
    random_int(0, 1000)
}

pub fn random_currency() -> String {
    ["USD", "EUR", "CAD"]
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("USD")
        .to_string()
}

pub fn assert_within_second(a: DateTime<Utc>, b: DateTime<Utc>) {
    let drift = (a - b).num_milliseconds().abs();
    assert!(drift <= 1000, "{a} and {b} are {drift}ms apart");
}

pub async fn create_random_account(q: &Queries) -> Account {
    let arg = CreateAccountParams {
        owner: random_owner(),
        balance: random_money(),
        currency: random_currency(),
    };
    let account = q.create_account(&arg).await.unwrap();

    assert_eq!(account.owner, arg.owner);
    assert_eq!(account.balance, arg.balance);
    assert_eq!(account.currency, arg.currency);
    assert_ne!(account.id, 0);
    assert!(account.created_at.timestamp() > 0);

    account
}
