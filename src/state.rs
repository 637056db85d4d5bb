//! Shared application state for all routes.

use crate::queries::Queries;

#[derive(Clone)]
pub struct AppState {
    pub queries: Queries,
}

impl AppState {
    pub fn new(pool: sqlx::PgPool) -> Self {
        AppState {
            queries: Queries::new(pool),
        }
    }
}
