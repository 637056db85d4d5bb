//! Ledger schema DDL: accounts, entries, transfers and their indexes.
//! Every statement is idempotent so the set can run on each startup.

use crate::error::AppError;
use sqlx::PgPool;

/// Key for `pg_advisory_lock`, serializing concurrent migrators.
const MIGRATION_LOCK_KEY: i64 = 0x5349_4d50_4c45_424b;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS accounts (
        id BIGSERIAL PRIMARY KEY,
        owner VARCHAR NOT NULL,
        balance BIGINT NOT NULL,
        currency VARCHAR NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS entries (
        id BIGSERIAL PRIMARY KEY,
        account_id BIGINT REFERENCES accounts (id),
        amount BIGINT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transfers (
        id BIGSERIAL PRIMARY KEY,
        from_account_id BIGINT REFERENCES accounts (id),
        to_account_id BIGINT REFERENCES accounts (id),
        amount BIGINT NOT NULL CONSTRAINT transfers_amount_non_negative CHECK (amount >= 0),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS accounts_owner_idx ON accounts (owner)",
    "CREATE INDEX IF NOT EXISTS entries_account_id_idx ON entries (account_id)",
    "CREATE INDEX IF NOT EXISTS transfers_from_account_id_idx ON transfers (from_account_id)",
    "CREATE INDEX IF NOT EXISTS transfers_to_account_id_idx ON transfers (to_account_id)",
    "CREATE INDEX IF NOT EXISTS transfers_from_to_idx ON transfers (from_account_id, to_account_id)",
    "COMMENT ON COLUMN entries.amount IS 'can be negative or positive'",
    "COMMENT ON COLUMN transfers.amount IS 'must not be negative'",
];

/// Create the ledger tables and indexes if they are missing.
/// Holds a session advisory lock on one connection for the duration.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    let mut conn = pool.acquire().await?;
    sqlx::query("SELECT pg_advisory_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *conn)
        .await?;

    let mut ddl = Ok(());
    for sql in STATEMENTS {
        tracing::debug!(sql = %sql, "migration");
        if let Err(e) = sqlx::query(sql).execute(&mut *conn).await {
            ddl = Err(AppError::from(e));
            break;
        }
    }

    let unlock = sqlx::query("SELECT pg_advisory_unlock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *conn)
        .await
        .map(|_| ())
        .map_err(AppError::from);
    if let Err(e) = &unlock {
        // The session may still hold the lock; it must not go back to the pool.
        tracing::warn!(error = %e, "advisory unlock failed, closing connection");
        drop(conn.detach());
    }

    let result = first_error(ddl, unlock);
    if result.is_ok() {
        tracing::info!(statements = STATEMENTS.len(), "ledger schema up to date");
    }
    result
}

/// A DDL failure wins over a failed unlock.
fn first_error(ddl: Result<(), AppError>, unlock: Result<(), AppError>) -> Result<(), AppError> {
    match ddl {
        Err(e) => Err(e),
        Ok(()) => unlock,
    }
}
