use super::{ListParams, Queries};
use crate::error::AppError;
use crate::models::Transfer;
use serde::Deserialize;

const CREATE_TRANSFER: &str = r#"
INSERT INTO transfers (from_account_id, to_account_id, amount)
VALUES ($1, $2, $3)
RETURNING id, from_account_id, to_account_id, amount, created_at
"#;

const GET_TRANSFER: &str = r#"
SELECT id, from_account_id, to_account_id, amount, created_at FROM transfers
WHERE id = $1
"#;

const LIST_TRANSFERS: &str = r#"
SELECT id, from_account_id, to_account_id, amount, created_at FROM transfers
ORDER BY id
LIMIT $1 OFFSET $2
"#;

const UPDATE_TRANSFER: &str = r#"
UPDATE transfers SET amount = $2
WHERE id = $1
RETURNING id, from_account_id, to_account_id, amount, created_at
"#;

const DELETE_TRANSFER: &str = "DELETE FROM transfers WHERE id = $1";

/// Records a transfer row only. Account balances are not touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreateTransferParams {
    #[serde(default)]
    pub from_account_id: Option<i64>,
    #[serde(default)]
    pub to_account_id: Option<i64>,
    pub amount: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateTransferParams {
    pub id: i64,
    pub amount: i64,
}

impl Queries {
    /// A negative amount is rejected by the table's check constraint.
    pub async fn create_transfer(&self, arg: CreateTransferParams) -> Result<Transfer, AppError> {
        tracing::debug!(sql = %CREATE_TRANSFER, params = ?arg, "query");
        let transfer = sqlx::query_as::<_, Transfer>(CREATE_TRANSFER)
            .bind(arg.from_account_id)
            .bind(arg.to_account_id)
            .bind(arg.amount)
            .fetch_one(self.pool())
            .await?;
        Ok(transfer)
    }

    pub async fn get_transfer(&self, id: i64) -> Result<Transfer, AppError> {
        tracing::debug!(sql = %GET_TRANSFER, id, "query");
        sqlx::query_as::<_, Transfer>(GET_TRANSFER)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| AppError::not_found("transfer", id))
    }

    pub async fn list_transfers(&self, arg: ListParams) -> Result<Vec<Transfer>, AppError> {
        arg.validate()?;
        tracing::debug!(sql = %LIST_TRANSFERS, params = ?arg, "query");
        let rows = sqlx::query_as::<_, Transfer>(LIST_TRANSFERS)
            .bind(arg.limit)
            .bind(arg.offset)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    pub async fn update_transfer(&self, arg: UpdateTransferParams) -> Result<Transfer, AppError> {
        tracing::debug!(sql = %UPDATE_TRANSFER, params = ?arg, "query");
        sqlx::query_as::<_, Transfer>(UPDATE_TRANSFER)
            .bind(arg.id)
            .bind(arg.amount)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| AppError::not_found("transfer", arg.id))
    }

    pub async fn delete_transfer(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE_TRANSFER, id, "query");
        sqlx::query(DELETE_TRANSFER).bind(id).execute(self.pool()).await?;
        Ok(())
    }
}
