//! Repository for the `years` table and year-wide seeding and reads.

use finboard_core::catalog::MONTH_NAMES;
use finboard_core::entry::MonthView;
use finboard_core::types::YearNumber;
use sqlx::PgPool;

use super::{CatalogRepo, ENTRY_SELECT};
use crate::models::month::{group_by_month, MonthEntryRow};

/// Provides year listing, idempotent seeding, and the nested year view.
pub struct YearRepo;

impl YearRepo {
    /// List all seeded years, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<YearNumber>, sqlx::Error> {
        sqlx::query_scalar::<_, YearNumber>("SELECT year FROM years ORDER BY year DESC")
            .fetch_all(pool)
            .await
    }

    /// Whether the year has been seeded.
    pub async fn exists(pool: &PgPool, year: YearNumber) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM years WHERE year = $1)")
            .bind(year)
            .fetch_one(pool)
            .await
    }

    /// Make sure the year exists with all twelve months and one zeroed entry
    /// per month and category.
    ///
    /// The catalog is ensured first. Seeding runs in one transaction guarded by
    /// the `years` primary key: a concurrent caller blocks on the conflicting
    /// insert and, once the first commits, sees zero affected rows and backs
    /// off. Returns `true` only for the call that created the year.
    pub async fn ensure(pool: &PgPool, year: YearNumber) -> Result<bool, sqlx::Error> {
        CatalogRepo::ensure(pool).await?;

        if Self::exists(pool, year).await? {
            return Ok(false);
        }

        let mut tx = pool.begin().await?;

        let claimed =
            sqlx::query("INSERT INTO years (year) VALUES ($1) ON CONFLICT (year) DO NOTHING")
                .bind(year)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        if claimed == 0 {
            tx.commit().await?;
            return Ok(false);
        }

        let numbers: Vec<i32> = (1..=MONTH_NAMES.len() as i32).collect();
        let names: Vec<String> = MONTH_NAMES.iter().map(|n| n.to_string()).collect();
        sqlx::query(
            "INSERT INTO months (year, month, name)
             SELECT $1, month, name
             FROM UNNEST($2::int4[], $3::text[]) AS t(month, name)",
        )
        .bind(year)
        .bind(&numbers)
        .bind(&names)
        .execute(&mut *tx)
        .await?;

        let entries = sqlx::query(
            "INSERT INTO monthly_categories (year, month, category_code)
             SELECT m.year, m.month, c.code
             FROM months m
             CROSS JOIN categories c
             WHERE m.year = $1",
        )
        .bind(year)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;
        tracing::info!(year, entries, "Seeded year");
        Ok(true)
    }

    /// Load every month of the year with its categories, ordered by month and
    /// catalog position. Does not seed; an unknown year yields an empty list.
    pub async fn load(pool: &PgPool, year: YearNumber) -> Result<Vec<MonthView>, sqlx::Error> {
        let query =
            format!("{ENTRY_SELECT} WHERE m.year = $1 ORDER BY m.month, c.sort_order, c.code");
        let rows = sqlx::query_as::<_, MonthEntryRow>(&query)
            .bind(year)
            .fetch_all(pool)
            .await?;
        Ok(group_by_month(rows))
    }
}
