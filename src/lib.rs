//! Simple bank: accounts, entries and transfers on PostgreSQL.
//!
//! [`Queries`] is the data-access layer; [`load_config`] reads `app.env` with environment
//! overrides; [`routes::app`] exposes the ledger over HTTP.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod queries;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{load_config, load_config_with, Config};
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use models::{Account, Entry, Transfer};
pub use queries::{
    CreateAccountParams, CreateEntryParams, CreateTransferParams, ListParams, Queries,
    UpdateAccountParams, UpdateEntryParams, UpdateTransferParams,
};
pub use response::{page, single};
pub use routes::{app, common_routes, ledger_routes};
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
