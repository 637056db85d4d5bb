//! JSON success bodies: `{data}` for one row, `{data, meta: {count}}` for a page.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Data<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Serialize)]
pub struct PageMeta {
    /// Rows in this page, not in the table.
    pub count: usize,
}

/// One row with the given status (`201` after a create, `200` otherwise).
pub fn single<T: Serialize>(status: StatusCode, row: T) -> (StatusCode, Json<Data<T>>) {
    (status, Json(Data { data: row }))
}

pub fn page<T: Serialize>(rows: Vec<T>) -> Json<Page<T>> {
    let count = rows.len();
    Json(Page {
        data: rows,
        meta: PageMeta { count },
    })
}
