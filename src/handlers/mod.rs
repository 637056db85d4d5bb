//! HTTP handlers for the ledger entities.

pub mod account;
pub mod entry;
pub mod transfer;

use crate::error::AppError;
use crate::queries::ListParams;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use std::collections::HashMap;

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Deserialize)]
pub struct AmountBody {
    pub amount: i64,
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// `limit` defaults to 100 and is capped at 1000, `offset` defaults to 0.
/// Negative values are passed through and rejected by the query layer.
fn list_params(params: &HashMap<String, String>) -> Result<ListParams, AppError> {
    let parse = |key: &str, default: i64| -> Result<i64, AppError> {
        match params.get(key) {
            None => Ok(default),
            Some(v) => v
                .parse()
                .map_err(|_| AppError::BadRequest(format!("invalid {} '{}'", key, v))),
        }
    };
    Ok(ListParams {
        limit: parse("limit", DEFAULT_LIMIT)?.min(MAX_LIMIT),
        offset: parse("offset", 0)?,
    })
}

fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}
