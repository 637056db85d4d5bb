//! Transfer CRUD handlers.

use super::{json_body, list_params, parse_id, AmountBody};
use crate::error::AppError;
use crate::queries::{CreateTransferParams, UpdateTransferParams};
use crate::response::{page, single};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransferParams>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let transfer = state.queries.create_transfer(json_body(payload)?).await?;
    tracing::info!(
        id = transfer.id,
        from = ?transfer.from_account_id,
        to = ?transfer.to_account_id,
        amount = transfer.amount,
        "transfer recorded"
    );
    Ok(single(StatusCode::CREATED, transfer))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let transfer = state.queries.get_transfer(parse_id(&id_str)?).await?;
    Ok(single(StatusCode::OK, transfer))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let transfers = state.queries.list_transfers(list_params(&params)?).await?;
    Ok(page(transfers))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<AmountBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let AmountBody { amount } = json_body(payload)?;
    let transfer = state
        .queries
        .update_transfer(UpdateTransferParams { id, amount })
        .await?;
    Ok(single(StatusCode::OK, transfer))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.queries.delete_transfer(parse_id(&id_str)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
