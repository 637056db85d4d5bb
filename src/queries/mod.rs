//! Parameterized CRUD queries for accounts, entries and transfers.

mod account;
mod entry;
mod transfer;

pub use account::{CreateAccountParams, UpdateAccountParams};
pub use entry::{CreateEntryParams, UpdateEntryParams};
pub use transfer::{CreateTransferParams, UpdateTransferParams};

use crate::error::AppError;
use sqlx::PgPool;

/// Query layer over a shared pool. The pool is owned by the caller; cloning is cheap.
#[derive(Clone, Debug)]
pub struct Queries {
    pool: PgPool,
}

impl Queries {
    pub fn new(pool: PgPool) -> Self {
        Queries { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Offset pagination over rows ordered by id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListParams {
    pub limit: i64,
    pub offset: i64,
}

impl ListParams {
    pub fn new(limit: i64, offset: i64) -> Self {
        ListParams { limit, offset }
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.limit < 0 {
            return Err(AppError::Validation(format!(
                "limit must not be negative, got {}",
                self.limit
            )));
        }
        if self.offset < 0 {
            return Err(AppError::Validation(format!(
                "offset must not be negative, got {}",
                self.offset
            )));
        }
        Ok(())
    }
}
