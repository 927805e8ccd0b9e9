use serde::Serialize;
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub code: String,
    pub label: String,
    #[serde(skip)]
    pub sort_order: i16,
}
