//! Repository for single-month reads and the bulk category update.

use std::collections::HashSet;

use finboard_core::entry::{CategoryPatch, MonthView};
use finboard_core::types::{MonthNumber, YearNumber};
use sqlx::PgPool;

use super::ENTRY_SELECT;
use crate::models::month::{group_by_month, MonthEntryRow};

/// Provides the month projection and the transactional month update.
pub struct MonthRepo;

impl MonthRepo {
    /// Load one month of one year.
    ///
    /// Returns `None` when the pair was never seeded. Does not seed.
    pub async fn find(
        pool: &PgPool,
        year: YearNumber,
        month: MonthNumber,
    ) -> Result<Option<MonthView>, sqlx::Error> {
        let query = format!(
            "{ENTRY_SELECT} WHERE m.year = $1 AND m.month = $2 ORDER BY c.sort_order, c.code"
        );
        let rows = sqlx::query_as::<_, MonthEntryRow>(&query)
            .bind(year)
            .bind(month)
            .fetch_all(pool)
            .await?;
        Ok(group_by_month(rows).into_iter().next())
    }

    /// Overwrite the five mutable fields of every patched category.
    ///
    /// Each patch updates the row keyed on `(year, month, code)`; unknown codes
    /// match nothing and are skipped. All patches commit together. On any
    /// failure the transaction is rolled back before the error is returned.
    /// Returns the number of distinct categories changed; a code repeated in
    /// `patches` counts once.
    pub async fn update_categories(
        pool: &PgPool,
        year: YearNumber,
        month: MonthNumber,
        patches: &[CategoryPatch],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        match Self::apply_patches(&mut tx, year, month, patches).await {
            Ok(updated) => {
                tx.commit().await?;
                tracing::info!(year, month, updated, "Updated month categories");
                Ok(updated)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::error!(error = %rollback_err, year, month, "Rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn apply_patches(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        year: YearNumber,
        month: MonthNumber,
        patches: &[CategoryPatch],
    ) -> Result<u64, sqlx::Error> {
        let mut changed: HashSet<&str> = HashSet::new();
        for patch in patches {
            let result = sqlx::query(
                "UPDATE monthly_categories SET
                    revenue = $4,
                    expense = $5,
                    revenue_note = $6,
                    expense_note = $7,
                    target_revenue = $8,
                    updated_at = NOW()
                 WHERE year = $1 AND month = $2 AND category_code = $3",
            )
            .bind(year)
            .bind(month)
            .bind(&patch.code)
            .bind(patch.revenue)
            .bind(patch.expense)
            .bind(&patch.revenue_note)
            .bind(&patch.expense_note)
            .bind(patch.target_revenue)
            .execute(&mut **tx)
            .await?;
            if result.rows_affected() > 0 {
                changed.insert(patch.code.as_str());
            }
        }
        Ok(changed.len() as u64)
    }
}
