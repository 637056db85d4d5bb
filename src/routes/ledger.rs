//! CRUD routes for accounts, entries and transfers.

use crate::handlers::{account, entry, transfer};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn ledger_routes(state: AppState) -> Router {
    Router::new()
        .route("/accounts", get(account::list).post(account::create))
        .route(
            "/accounts/:id",
            get(account::read).patch(account::update).delete(account::delete),
        )
        .route("/entries", get(entry::list).post(entry::create))
        .route(
            "/entries/:id",
            get(entry::read).patch(entry::update).delete(entry::delete),
        )
        .route("/transfers", get(transfer::list).post(transfer::create))
        .route(
            "/transfers/:id",
            get(transfer::read).patch(transfer::update).delete(transfer::delete),
        )
        .with_state(state)
}
