use axum::extract::State;
use axum::Json;
use finboard_db::models::category::Category;
use finboard_db::repositories::CatalogRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}

/// GET /api/v1/categories
///
/// The catalog in display order, seeding it on first use.
pub async fn list_categories(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<CategoriesResponse>> {
    CatalogRepo::ensure(&state.pool).await?;
    let categories = CatalogRepo::list(&state.pool).await?;
    Ok(Json(CategoriesResponse { categories }))
}
