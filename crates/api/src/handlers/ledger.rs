//! Handlers for years, the year view, and single months.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use finboard_core::entry::{validate_patches, MonthUpdate, MonthView};
use finboard_core::error::CoreError;
use finboard_core::period::{validate_month, validate_year};
use finboard_core::types::{MonthNumber, YearNumber};
use finboard_db::repositories::{MonthRepo, YearRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{ApiJson, ApiQuery};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters `?year=`.
#[derive(Debug, Deserialize)]
pub struct YearParams {
    pub year: Option<YearNumber>,
}

/// Query parameters `?year=&month=`.
#[derive(Debug, Deserialize)]
pub struct MonthParams {
    pub year: Option<YearNumber>,
    pub month: Option<MonthNumber>,
}

/// Request body for `POST /years`.
#[derive(Debug, Deserialize)]
pub struct CreateYearRequest {
    pub year: Option<YearNumber>,
}

#[derive(Debug, Serialize)]
pub struct YearsResponse {
    pub years: Vec<YearNumber>,
}

#[derive(Debug, Serialize)]
pub struct CreateYearResponse {
    pub ok: bool,
    pub year: YearNumber,
    /// `false` when the year already existed.
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct YearResponse {
    pub months: Vec<MonthView>,
}

#[derive(Debug, Serialize)]
pub struct MonthResponse {
    pub month: MonthView,
}

#[derive(Debug, Serialize)]
pub struct UpdateMonthResponse {
    pub ok: bool,
    /// Distinct categories changed. Unknown codes are not counted and a
    /// repeated code counts once.
    pub updated: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/years
pub async fn list_years(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<YearsResponse>> {
    let years = YearRepo::list(&state.pool).await?;
    Ok(Json(YearsResponse { years }))
}

/// POST /api/v1/years
///
/// Seed a year (idempotent). Always answers 201 with the year.
pub async fn create_year(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateYearRequest>,
) -> AppResult<(StatusCode, Json<CreateYearResponse>)> {
    let year = validate_year(input.year)?;
    let created = YearRepo::ensure(&state.pool, year).await?;
    tracing::info!(year, created, user_id = user.user_id, "Year ensured");

    Ok((
        StatusCode::CREATED,
        Json(CreateYearResponse {
            ok: true,
            year,
            created,
        }),
    ))
}

/// GET /api/v1/year?year=
///
/// Twelve months with their categories, seeding the year on first access.
pub async fn get_year(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<YearParams>,
) -> AppResult<Json<YearResponse>> {
    let year = validate_year(params.year)?;
    YearRepo::ensure(&state.pool, year).await?;
    let months = YearRepo::load(&state.pool, year).await?;
    tracing::debug!(year, months = months.len(), "Loaded year");
    Ok(Json(YearResponse { months }))
}

/// GET /api/v1/month?year=&month=
///
/// Does not seed: a pair that was never seeded is a 404.
pub async fn get_month(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<MonthParams>,
) -> AppResult<Json<MonthResponse>> {
    let year = validate_year(params.year)?;
    let month = validate_month(params.month)?;

    let view = MonthRepo::find(&state.pool, year, month)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Month",
                key: format!("{year}/{month}"),
            })
        })?;
    Ok(Json(MonthResponse { month: view }))
}

/// PUT /api/v1/month
///
/// Replace the figures of the listed categories in one transaction.
pub async fn update_month(
    RequireAdmin(user): RequireAdmin,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<MonthUpdate>,
) -> AppResult<Json<UpdateMonthResponse>> {
    let year = validate_year(input.year)?;
    let month = validate_month(input.month)?;
    validate_patches(&input.categories)?;

    YearRepo::ensure(&state.pool, year).await?;
    let updated = MonthRepo::update_categories(&state.pool, year, month, &input.categories).await?;
    tracing::info!(year, month, updated, user_id = user.user_id, "Month saved");

    Ok(Json(UpdateMonthResponse { ok: true, updated }))
}
