use super::{ListParams, Queries};
use crate::error::AppError;
use crate::models::Account;
use serde::Deserialize;

const CREATE_ACCOUNT: &str = r#"
INSERT INTO accounts (owner, balance, currency)
VALUES ($1, $2, $3)
RETURNING id, owner, balance, currency, created_at
"#;

const GET_ACCOUNT: &str = r#"
SELECT id, owner, balance, currency, created_at FROM accounts
WHERE id = $1
"#;

const LIST_ACCOUNTS: &str = r#"
SELECT id, owner, balance, currency, created_at FROM accounts
ORDER BY id
LIMIT $1 OFFSET $2
"#;

const UPDATE_ACCOUNT: &str = r#"
UPDATE accounts SET balance = $2
WHERE id = $1
RETURNING id, owner, balance, currency, created_at
"#;

const DELETE_ACCOUNT: &str = "DELETE FROM accounts WHERE id = $1";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CreateAccountParams {
    pub owner: String,
    #[serde(default)]
    pub balance: i64,
    pub currency: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateAccountParams {
    pub id: i64,
    pub balance: i64,
}

impl Queries {
    pub async fn create_account(&self, arg: &CreateAccountParams) -> Result<Account, AppError> {
        tracing::debug!(sql = %CREATE_ACCOUNT, params = ?arg, "query");
        let account = sqlx::query_as::<_, Account>(CREATE_ACCOUNT)
            .bind(&arg.owner)
            .bind(arg.balance)
            .bind(&arg.currency)
            .fetch_one(self.pool())
            .await?;
        Ok(account)
    }

    pub async fn get_account(&self, id: i64) -> Result<Account, AppError> {
        tracing::debug!(sql = %GET_ACCOUNT, id, "query");
        sqlx::query_as::<_, Account>(GET_ACCOUNT)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| AppError::not_found("account", id))
    }

    pub async fn list_accounts(&self, arg: ListParams) -> Result<Vec<Account>, AppError> {
        arg.validate()?;
        tracing::debug!(sql = %LIST_ACCOUNTS, params = ?arg, "query");
        let rows = sqlx::query_as::<_, Account>(LIST_ACCOUNTS)
            .bind(arg.limit)
            .bind(arg.offset)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// Set a new balance; owner, currency and created_at are left as they are.
    pub async fn update_account(&self, arg: UpdateAccountParams) -> Result<Account, AppError> {
        tracing::debug!(sql = %UPDATE_ACCOUNT, params = ?arg, "query");
        sqlx::query_as::<_, Account>(UPDATE_ACCOUNT)
            .bind(arg.id)
            .bind(arg.balance)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| AppError::not_found("account", arg.id))
    }

    /// Deleting an id that does not exist is not an error.
    /// Fails with a constraint violation while entries or transfers still reference the account.
    pub async fn delete_account(&self, id: i64) -> Result<(), AppError> {
        tracing::debug!(sql = %DELETE_ACCOUNT, id, "query");
        sqlx::query(DELETE_ACCOUNT).bind(id).execute(self.pool()).await?;
        Ok(())
    }
}
