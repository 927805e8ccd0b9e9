use axum::extract::State;
use axum::Json;
use finboard_core::period::validate_year;
use finboard_core::totals::{summarize_year, YearSummary};
use finboard_db::repositories::YearRepo;

use super::ledger::YearParams;
use crate::error::AppResult;
use crate::extract::ApiQuery;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// GET /api/v1/summary?year=
///
/// Revenue, expense, result, target, and progress per month and for the
/// whole year. Seeds the year like the year view does.
pub async fn get_summary(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<YearParams>,
) -> AppResult<Json<YearSummary>> {
    let year = validate_year(params.year)?;
    YearRepo::ensure(&state.pool, year).await?;
    let months = YearRepo::load(&state.pool, year).await?;
    Ok(Json(summarize_year(year, &months)))
}
