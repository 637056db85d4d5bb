//! Entry CRUD handlers.

use super::{json_body, list_params, parse_id, AmountBody};
use crate::error::AppError;
use crate::queries::{CreateEntryParams, UpdateEntryParams};
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
    payload: Result<Json<CreateEntryParams>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.queries.create_entry(json_body(payload)?).await?;
    Ok(single(StatusCode::CREATED, entry))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state.queries.get_entry(parse_id(&id_str)?).await?;
    Ok(single(StatusCode::OK, entry))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.queries.list_entries(list_params(&params)?).await?;
    Ok(page(entries))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<AmountBody>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let AmountBody { amount } = json_body(payload)?;
    let entry = state
        .queries
        .update_entry(UpdateEntryParams { id, amount })
        .await?;
    Ok(single(StatusCode::OK, entry))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.queries.delete_entry(parse_id(&id_str)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
