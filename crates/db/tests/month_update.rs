//! Database-level tests for the month projection and bulk update.

use finboard_core::entry::CategoryPatch;
use finboard_db::repositories::{MonthRepo, YearRepo};
use sqlx::PgPool;

fn patch(code: &str, revenue: f64, expense: f64, target: f64) -> CategoryPatch {
    CategoryPatch {
        code: code.to_string(),
        revenue,
        expense,
        target_revenue: target,
        ..Default::default()
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_unseeded_month_is_none(pool: PgPool) {
    assert!(MonthRepo::find(&pool, 2025, 3).await.unwrap().is_none());
    assert!(!YearRepo::exists(&pool, 2025).await.unwrap(), "find must not seed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_round_trip(pool: PgPool) {
    YearRepo::ensure(&pool, 2025).await.unwrap();

    let mut ic = patch("IC", 1000.0, 200.0, 1200.0);
    ic.revenue_note = "Contrato março".into();
    let updated = MonthRepo::update_categories(&pool, 2025, 3, &[ic]).await.unwrap();
    assert_eq!(updated, 1);

    let month = MonthRepo::find(&pool, 2025, 3).await.unwrap().unwrap();
    assert_eq!(month.id, 3);
    assert_eq!(month.name, "Março");
    let ic = &month.categories[0];
    assert_eq!(ic.code, "IC");
    assert_eq!(ic.revenue, 1000.0);
    assert_eq!(ic.expense, 200.0);
    assert_eq!(ic.target_revenue, 1200.0);
    assert_eq!(ic.revenue_note, "Contrato março");
    assert_eq!(ic.expense_note, "");
    assert!(month.categories[1..].iter().all(|c| c.revenue == 0.0 && c.expense == 0.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_full_replace(pool: PgPool) {
    YearRepo::ensure(&pool, 2025).await.unwrap();
    MonthRepo::update_categories(&pool, 2025, 1, &[patch("FIXO", 50.0, 60.0, 70.0)])
        .await
        .unwrap();

    // A second patch without expense or target resets them to zero.
    MonthRepo::update_categories(&pool, 2025, 1, &[patch("FIXO", 80.0, 0.0, 0.0)])
        .await
        .unwrap();

    let month = MonthRepo::find(&pool, 2025, 1).await.unwrap().unwrap();
    let fixo = month.categories.iter().find(|c| c.code == "FIXO").unwrap();
    assert_eq!((fixo.revenue, fixo.expense, fixo.target_revenue), (80.0, 0.0, 0.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_isolated_to_month(pool: PgPool) {
    YearRepo::ensure(&pool, 2024).await.unwrap();
    YearRepo::ensure(&pool, 2025).await.unwrap();

    MonthRepo::update_categories(&pool, 2025, 6, &[patch("EAD", 10.0, 5.0, 20.0)])
        .await
        .unwrap();

    for (year, month) in [(2025, 5), (2025, 7), (2024, 6)] {
        let view = MonthRepo::find(&pool, year, month).await.unwrap().unwrap();
        assert!(
            view.categories.iter().all(|c| c.revenue == 0.0),
            "{year}/{month} must be untouched"
        );
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_codes_are_dropped(pool: PgPool) {
    YearRepo::ensure(&pool, 2025).await.unwrap();
    let updated = MonthRepo::update_categories(
        &pool,
        2025,
        2,
        &[patch("GHOST", 1.0, 1.0, 1.0), patch("OUTROS", 3.0, 0.0, 0.0)],
    )
    .await
    .unwrap();
    assert_eq!(updated, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_update_rolls_back_earlier_patches(pool: PgPool) {
    YearRepo::ensure(&pool, 2025).await.unwrap();

    // The second patch violates the non-negative CHECK constraint.
    let result = MonthRepo::update_categories(
        &pool,
        2025,
        4,
        &[patch("IC", 500.0, 0.0, 0.0), patch("ABERTO", -1.0, 0.0, 0.0)],
    )
    .await;
    assert!(result.is_err());

    let month = MonthRepo::find(&pool, 2025, 4).await.unwrap().unwrap();
    assert_eq!(month.categories[0].code, "IC");
    assert_eq!(month.categories[0].revenue, 0.0, "first patch must be rolled back");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_code_counts_once_and_last_wins(pool: PgPool) {
    YearRepo::ensure(&pool, 2025).await.unwrap();

    let updated = MonthRepo::update_categories(
        &pool,
        2025,
        6,
        &[patch("IC", 100.0, 0.0, 0.0), patch("IC", 250.0, 40.0, 300.0)],
    )
    .await
    .unwrap();
    assert_eq!(updated, 1);

    let month = MonthRepo::find(&pool, 2025, 6).await.unwrap().unwrap();
    let ic = &month.categories[0];
    assert_eq!((ic.revenue, ic.expense, ic.target_revenue), (250.0, 40.0, 300.0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_amount_above_bound_violates_check(pool: PgPool) {
    YearRepo::ensure(&pool, 2025).await.unwrap();

    let err = MonthRepo::update_categories(&pool, 2025, 7, &[patch("EAD", 1e13, 0.0, 0.0)])
        .await
        .unwrap_err();
    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.code().as_deref(), Some("23514"));
    assert_eq!(db_err.constraint(), Some("ck_monthly_categories_amount_bound"));
}
