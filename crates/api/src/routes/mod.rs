pub mod auth;
pub mod health;
pub mod ledger;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login          login (public)
/// /auth/me             current user (requires auth)
///
/// /categories          category catalog (requires auth)
/// /years               list (auth), create (admin)
/// /year?year=          full year view (auth)
/// /month?year=&month=  single month (auth), bulk update (admin, PUT)
/// /summary?year=       month and year totals (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(ledger::router())
}
