use super::{ListParams, Queries};
use crate::error::AppError;
use crate::models::Entry;
use serde::Deserialize;

const CREATE_ENTRY: &str = r#"
INSERT INTO entries (account_id, amount)
VALUES ($1, $2)
RETURNING id, account_id, amount, created_at
"#;

const GET_ENTRY: &str = r#"
SELECT id, account_id, amount, created_at FROM entries
WHERE id = $1
"#;

const LIST_ENTRIES: &str = r#"
SELECT id, account_id, amount, created_at FROM entries
ORDER BY id
LIMIT $1 OFFSET $2
"#;

const UPDATE_ENTRY: &str = r#"
UPDATE entries SET amount = $2
WHERE id = $1
RETURNING id, account_id, amount, created_at
"#;

const DELETE_ENTRY: &str = "DELETE FROM entries WHERE id = $1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreateEntryParams {
    #[serde(default)]
    pub account_id: Option<i64>,
    pub amount: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateEntryParams {
    pub id: i64,
    pub amount: i64,
}

impl Queries {
    pub async fn create_entry(&self, arg: CreateEntryParams) -> Result<Entry, AppError> {
        tracing::debug!(sql = %CREATE_ENTRY, params = ?arg, "query");
        let entry = sqlx::query_as::<_, Entry>(CREATE_ENTRY)
            .bind(arg.account_id)
            .bind(arg.amount)
            .fetch_one(self.pool())
            .await?;
        Ok(entry)
    }

    pub async fn get_entry(&self, id: i64) -> Result<Entry, AppError> {
        tracing::debug!(sql = %GET_ENTRY, id, "query");
        sqlx::query_as::<_, Entry>(GET_ENTRY)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| AppError::not_found("entry", id))
    }

    pub async fn list_entries(&self, arg: ListParams) -> Result<Vec<Entry>, AppError> {
        arg.validate()?;
        tracing::debug!(sql = %LIST_ENTRIES, params = ?arg, "query");
        let rows = sqlx::query_as::<_, Entry>(LIST_ENTRIES)
            .bind(arg.limit)
            .bind(arg.offset)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    pub async fn update_entry(&self, arg: UpdateEntryParams) -> Result<Entry, AppError> {
        tracing::debug!(sql = %UPDATE_ENTRY, params = ?arg, "query");
        sqlx::query_as::<_, Entry>(UPDATE_ENTRY)
            .bind(arg.id)
            .bind(arg.amount)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| AppError::not_found("entry", arg.id))
    }

    pub async fn delete_entry(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE_ENTRY, id, "query");
        sqlx::query(DELETE_ENTRY).bind(id).execute(self.pool()).await?;
        Ok(())
    }
}
