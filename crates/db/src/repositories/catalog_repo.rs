//! Repository for the `categories` table.

use finboard_core::catalog::CATEGORY_PRESET;
use sqlx::PgPool;

use crate::models::category::Category;

/// Seeds and lists the category catalog.
pub struct CatalogRepo;

impl CatalogRepo {
    /// Insert every preset category that is not present yet.
    ///
    /// A single `ON CONFLICT DO NOTHING` statement, so concurrent callers never
    /// duplicate rows and an existing label is never overwritten. Returns the
    /// number of categories inserted.
    pub async fn ensure(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let codes: Vec<String> = CATEGORY_PRESET.iter().map(|p| p.code.to_string()).collect();
        let labels: Vec<String> = CATEGORY_PRESET.iter().map(|p| p.label.to_string()).collect();
        let orders: Vec<i16> = (0..CATEGORY_PRESET.len() as i16).collect();

        let result = sqlx::query(
            "INSERT INTO categories (code, label, sort_order)
             SELECT code, label, sort_order
             FROM UNNEST($1::text[], $2::text[], $3::int2[]) AS t(code, label, sort_order)
             ON CONFLICT (code) DO NOTHING",
        )
        .bind(&codes)
        .bind(&labels)
        .bind(&orders)
        .execute(pool)
        .await?;

        let inserted = result.rows_affected();
        if inserted > 0 {
            tracing::info!(inserted, "Seeded category catalog");
        }
        Ok(inserted)
    }

    /// List all categories in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>(
            "SELECT code, label, sort_order FROM categories ORDER BY sort_order, code",
        )
        .fetch_all(pool)
        .await
    }
}
