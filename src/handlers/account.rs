//! Account CRUD handlers.

use super::{json_body, list_params, parse_id};
use crate::error::AppError;
use crate::queries::{CreateAccountParams, UpdateAccountParams};
use crate::response::{page, single};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct BalanceBody {
    pub balance: i64,
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateAccountParams>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let body = json_body(payload)?;
    if body.owner.trim().is_empty() {
        return Err(AppError::Validation("owner is required".into()));
    }
    if body.currency.trim().is_empty() {
        return Err(AppError::Validation("currency is required".into()));
    }
    let account = state.queries.create_account(&body).await?;
    tracing::info!(id = account.id, owner = %account.owner, "account created");
    Ok(single(StatusCode::CREATED, account))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let account = state.queries.get_account(parse_id(&id_str)?).await?;
    Ok(single(StatusCode::OK, account))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let accounts = state.queries.list_accounts(list_params(&params)?).await?;
    Ok(page(accounts))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<BalanceBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let BalanceBody { balance } = json_body(payload)?;
    let account = state
        .queries
        .update_account(UpdateAccountParams { id, balance })
        .await?;
    Ok(single(StatusCode::OK, account))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.queries.delete_account(parse_id(&id_str)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
